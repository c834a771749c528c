//! # Tally Demo
//!
//! Prices an order with `tally-core` and prints an order summary.
//!
//! ## Usage
//! ```bash
//! # Price the built-in sample order
//! cargo run -p tally-demo
//!
//! # Price an order from a JSON file
//! cargo run -p tally-demo -- --order apps/tally-demo/orders/sample.json
//!
//! # Print the full quote as JSON instead of a summary
//! cargo run -p tally-demo -- --order orders/sample.json --json
//!
//! # More logging
//! RUST_LOG=debug cargo run -p tally-demo
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load pricing configuration from `TALLY_*` environment variables
//! 3. Read the order (file or built-in sample)
//! 4. Price it and print the summary (stdout)

mod config;
mod error;
mod summary;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tally_core::{Money, OrderCalculator, OrderItem};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, DemoConfig};
use crate::error::{AppError, AppResult};
use crate::summary::render_summary;

const USAGE: &str = "\
Tally Order Pricing Demo

Usage: tally-demo [OPTIONS]

Options:
  -o, --order <PATH>   JSON order file (default: built-in sample order)
      --json           Print the quote as JSON
  -h, --help           Show this help message";

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct DemoArgs {
    order_path: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Pricing failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> AppResult<()> {
    let args = parse_args(args)?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    info!("Starting Tally demo");

    let config = DemoConfig::from_env()?;
    let pricing = &config.pricing;
    info!(
        electronics_tax_pct = pricing.electronics_tax().percentage(),
        book_discount_pct = pricing.book_discount().percentage(),
        book_bulk_quantity = pricing.book_bulk_quantity,
        free_shipping_from = %pricing.free_shipping_threshold(),
        shipping = %pricing.standard_shipping(),
        "Configuration loaded"
    );

    let order = match &args.order_path {
        Some(path) => load_order(path)?,
        None => sample_order(),
    };
    debug!(
        items = order.len(),
        source = ?args.order_path,
        "Order loaded"
    );

    let calculator = OrderCalculator::from_config(pricing).map_err(ConfigError::from)?;
    debug!(rules = ?calculator.rules(), "Calculator ready");

    let quote = calculator.quote(&order)?;
    for line in &quote.lines {
        debug!(
            product = %line.product_name,
            category = %line.category,
            line_total = %line.line_total,
            adjusted = %line.adjusted_total,
            "Line priced"
        );
    }
    info!(
        subtotal = %quote.subtotal,
        shipping = %quote.shipping,
        total = %quote.total,
        "Order priced"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&quote).map_err(AppError::Encode)?;
        println!("{json}");
    } else {
        print!("{}", render_summary(&quote));
    }

    Ok(())
}

fn parse_args(args: &[String]) -> AppResult<DemoArgs> {
    let mut parsed = DemoArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--order" | "-o" => {
                let path = iter
                    .next()
                    .ok_or_else(|| AppError::Usage(format!("{arg} requires a path\n\n{USAGE}")))?;
                parsed.order_path = Some(PathBuf::from(path));
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(AppError::Usage(format!(
                    "unknown argument '{other}'\n\n{USAGE}"
                )))
            }
        }
    }

    Ok(parsed)
}

/// Reads a JSON array of order items.
fn load_order(path: &Path) -> AppResult<Vec<OrderItem>> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The order priced when no file is given.
fn sample_order() -> Vec<OrderItem> {
    vec![
        OrderItem::new("Laptop", Money::from_major_minor(999, 99), 1, "ELECTRONICS"),
        OrderItem::new("Programming Books", Money::from_major_minor(29, 99), 6, "BOOKS"),
        OrderItem::new("Mouse Pad", Money::from_major_minor(9, 99), 2, "ACCESSORIES"),
    ]
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-line pricing
/// - `RUST_LOG=tally_demo=trace` - Trace for the demo only
/// - Default: INFO, DEBUG for the demo
///
/// Logs go to stderr so `--json` output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_demo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), DemoArgs::default());
    }

    #[test]
    fn test_parse_args_order_and_json() {
        let parsed = parse_args(&args(&["-o", "order.json", "--json"])).unwrap();
        assert_eq!(parsed.order_path, Some(PathBuf::from("order.json")));
        assert!(parsed.json);
        assert!(!parsed.help);
    }

    #[test]
    fn test_parse_args_missing_path() {
        let err = parse_args(&args(&["--order"])).unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }

    #[test]
    fn test_parse_args_unknown() {
        let err = parse_args(&args(&["--fast"])).unwrap_err();
        assert!(err.to_string().starts_with("unknown argument '--fast'"));
    }

    #[test]
    fn test_sample_order_total() {
        let total = OrderCalculator::new()
            .calculate_order_total(&sample_order())
            .unwrap();
        assert_eq!(total, Money::from_cents(129091));
    }

    #[test]
    fn test_bundled_sample_file_matches_builtin_order() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("orders/sample.json");
        assert_eq!(load_order(&path).unwrap(), sample_order());
    }

    #[test]
    fn test_load_order_missing_file() {
        let err = load_order(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
