//! Example: Infer the scheme of a label set and render it as SVG.
//!
//! Usage:
//!   cargo run --example plot -- <label>... [--force <scheme>]
//!
//! Example:
//!   cargo run --example plot -- U S S S E E --force USE

use std::env;

use gradeplot::{GradePlot, LabelInput, Severity, SvgRenderer};

fn main() -> gradeplot::Result<()> {
    let mut labels = Vec::new();
    let mut force = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--force" {
            force = args.next();
        } else {
            labels.push(arg);
        }
    }

    if labels.is_empty() {
        eprintln!("Usage: cargo run --example plot -- <label>... [--force <scheme>]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example plot -- U S S S E E --force USE");
        std::process::exit(1);
    }

    let plotter = GradePlot::new();
    let result = plotter.plot(&LabelInput::flat(labels), Some("frequency"), force.as_deref())?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Scheme: {}", result.resolution.scheme);
    println!("{}", separator);
    println!();

    for (category, value) in result.chart.categories.iter().zip(&result.chart.values) {
        println!("  {:<20} {}", category, value);
    }
    println!();

    for diag in &result.resolution.warnings {
        let marker = match diag.severity {
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        println!("[{}] {}", marker, diag.message);
    }

    let svg = result.chart.render(&SvgRenderer::new());
    println!();
    println!("SVG document: {} bytes", svg.len());

    Ok(())
}
