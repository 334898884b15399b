//! ScrewUnit label-base CLI
//!
//! Builds one label base and prints a JSON summary of it.

use std::path::PathBuf;

use label_base::generator::GenerationSummary;
use label_base::{init_tracing, BaseShapeGenerator, GenerationRequest, GeneratorConfig, Length};
use label_kernel::{MockKernel, TruckKernel};
use modeling_ops::KernelBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KernelChoice {
    Truck,
    Mock,
}

#[derive(Debug)]
struct Options {
    size: String,
    depth: Option<String>,
    config: Option<PathBuf>,
    kernel: KernelChoice,
    verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: label_base::DEFAULT_VARIANT_ID.to_string(),
            depth: None,
            config: None,
            kernel: KernelChoice::Truck,
            verbose: false,
        }
    }
}

fn print_usage() {
    eprintln!("Usage: label-base [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size <id>          Bin size: small, wide (default: small)");
    eprintln!("  --depth <length>     Plate depth, e.g. 2mm, 0.5cm (default: half of 0.6mm)");
    eprintln!("  --config <file>      Generator settings as JSON");
    eprintln!("  --kernel <name>      Geometry kernel: truck, mock (default: truck)");
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
        if let Some(v) = take_value(args, &mut i, "--size")
            .or_else(|| take_value(args, &mut i, "--screwunit-size"))
        {
            options.size = v;
        } else if let Some(v) = take_value(args, &mut i, "--depth")
            .or_else(|| take_value(args, &mut i, "--label-depth"))
        {
            options.depth = Some(v);
        } else if let Some(v) = take_value(args, &mut i, "--config") {
            options.config = Some(PathBuf::from(v));
        } else if let Some(v) = take_value(args, &mut i, "--kernel") {
            options.kernel = match v.as_str() {
                "truck" => KernelChoice::Truck,
                "mock" => KernelChoice::Mock,
                other => {
                    eprintln!("error: unknown kernel '{}'", other);
                    std::process::exit(2);
                }
            };
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
    options
}

fn run(options: &Options, kb: &mut dyn KernelBundle) -> Result<String, String> {
    let config = match &options.config {
        Some(path) => GeneratorConfig::load(path).map_err(|e| e.to_string())?,
        None => GeneratorConfig::default(),
    };

    let mut request = GenerationRequest::new(options.size.clone());
    if let Some(depth) = &options.depth {
        request = request.with_depth(depth.parse::<Length>().map_err(|e| e.to_string())?);
    }

    let generator = BaseShapeGenerator::new(config);
    let result = generator.generate(kb, &request).map_err(|e| e.to_string())?;
    let summary = GenerationSummary::new(&result, kb.as_introspect());
    serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_options(&args);
    init_tracing(options.verbose);

    let outcome = match options.kernel {
        KernelChoice::Truck => run(&options, &mut TruckKernel::new()),
        KernelChoice::Mock => run(&options, &mut MockKernel::new()),
    };

    match outcome {
        Ok(json) => println!("{}", json),
        Err(message) => {
            eprintln!("error: {}", message);
            std::process::exit(1);
        }
    }
}
