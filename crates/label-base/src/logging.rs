//! Tracing setup for the `label-base` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "label_base=info,modeling_ops=warn,label_kernel=warn";

const VERBOSE_FILTER: &str = "label_base=debug,modeling_ops=debug,label_kernel=debug";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Call this once at startup. Safe to call multiple times.
/// Without `RUST_LOG`, `verbose` picks between [`DEFAULT_FILTER`] and debug
/// output for the label crates.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        // Another subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
