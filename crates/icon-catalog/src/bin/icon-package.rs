//! MDI icon package builder
//!
//! Downloads the catalog icons and writes `mdi-tech-icons.zip`.

use std::path::PathBuf;

use icon_catalog::{package, DirectorySource, HttpSource, IconSource};

#[derive(Debug)]
struct Options {
    out_dir: PathBuf,
    from: Option<PathBuf>,
    base_url: Option<String>,
    verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            from: None,
            base_url: None,
            verbose: false,
        }
    }
}

fn print_usage() {
    eprintln!("Usage: icon-package [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <dir>          Where to write mdi-tech-icons.zip (default: .)");
    eprintln!("  --from <dir>         Read <id>.svg files from a local MDI svg/ checkout");
    eprintln!("  --base-url <url>     Download from this prefix instead of the MDI repository");
    eprintln!("  -v, --verbose        Debug logging");
    eprintln!("  -h, --help           Show this help");
}

/// Value of `--flag value` or `--flag=value`, advancing `i` past it.
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Option<String> {
    let arg = &args[*i];
    if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
        *i += 1;
        return Some(value.to_string());
    }
    if arg == flag {
        if let Some(value) = args.get(*i + 1) {
            *i += 2;
            return Some(value.clone());
        }
        eprintln!("error: {} needs a value", flag);
        std::process::exit(2);
    }
    None
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        if let Some(v) = take_value(args, &mut i, "--out") {
            options.out_dir = PathBuf::from(v);
        } else if let Some(v) = take_value(args, &mut i, "--from") {
            options.from = Some(PathBuf::from(v));
        } else if let Some(v) = take_value(args, &mut i, "--base-url") {
            options.base_url = Some(v);
        } else if args[i] == "-v" || args[i] == "--verbose" {
            options.verbose = true;
            i += 1;
        } else if args[i] == "-h" || args[i] == "--help" {
            print_usage();
            std::process::exit(0);
        } else {
            eprintln!("error: unexpected argument '{}'", args[i]);
            print_usage();
            std::process::exit(2);
        }
    }
    if options.from.is_some() && options.base_url.is_some() {
        eprintln!("error: --from and --base-url cannot be combined");
        std::process::exit(2);
    }
    options
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fallback = if verbose { "icon_catalog=debug" } else { "icon_catalog=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_options(&args);
    init_tracing(options.verbose);

    let source: Box<dyn IconSource> = match (&options.from, &options.base_url) {
        (Some(dir), _) => Box::new(DirectorySource::new(dir.clone())),
        (None, Some(url)) => Box::new(HttpSource::with_base_url(url.clone())),
        (None, None) => Box::new(HttpSource::new()),
    };

    match package(source.as_ref(), &options.out_dir) {
        Ok(report) => {
            println!(
                "{}: {} icons, {} skipped",
                report.archive.display(),
                report.entries.len(),
                report.skipped.len()
            );
            for skipped in &report.skipped {
                println!("  skipped {}: {}", skipped.id, skipped.reason);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
