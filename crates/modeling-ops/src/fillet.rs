use std::time::Instant;

use label_kernel::{KernelId, KernelSolidHandle};
use tracing::debug;

use crate::kernel_ext::KernelBundle;
use crate::types::{Diagnostics, OpError, OpResult};

/// Outcome of a best-effort fillet.
#[derive(Debug, Clone)]
pub enum FilletAttempt {
    /// The kernel rounded the edges; the result holds the new solid.
    Applied(OpResult),
    /// The fillet could not be made. The input solid is unchanged and remains valid.
    Skipped(OpError),
}

impl FilletAttempt {
    pub fn is_applied(&self) -> bool {
        matches!(self, FilletAttempt::Applied(_))
    }
}

/// Execute a fillet operation on specified edges of a solid.
pub fn execute_fillet(
    kb: &mut dyn KernelBundle,
    solid: &KernelSolidHandle,
    edges: &[KernelId],
    radius: f64,
) -> Result<OpResult, OpError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(OpError::InvalidParameter {
            reason: "fillet radius must be positive".to_string(),
        });
    }
    if edges.is_empty() {
        return Err(OpError::NoEdges);
    }

    let started = Instant::now();
    let handle = kb.fillet_edges(solid, edges, radius)?;
    let kernel_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    Ok(OpResult {
        handle,
        diagnostics: Diagnostics { kernel_time_ms },
    })
}

/// Fillet the edges if the kernel can, otherwise report why not.
///
/// Never fails: every error from `execute_fillet` becomes
/// `FilletAttempt::Skipped`, and the caller keeps using `solid`.
pub fn try_fillet(
    kb: &mut dyn KernelBundle,
    solid: &KernelSolidHandle,
    edges: &[KernelId],
    radius: f64,
) -> FilletAttempt {
    match execute_fillet(kb, solid, edges, radius) {
        Ok(result) => FilletAttempt::Applied(result),
        Err(err) => {
            debug!(%err, edges = edges.len(), radius, "fillet skipped");
            FilletAttempt::Skipped(err)
        }
    }
}
