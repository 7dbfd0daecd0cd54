//! Resolve command - report the inferred scheme and normalized labels.

use colored::Colorize;
use gradeplot::{ForceScheme, ResolverConfig, SchemeResolver};

use super::{label_input, print_diagnostics};
use crate::cli::LabelArgs;

pub fn run(args: LabelArgs, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = label_input(&args)?;
    let resolver = SchemeResolver::with_config(ResolverConfig {
        coverage_threshold: args.coverage_threshold,
    });
    let resolution = resolver.resolve(&input, ForceScheme::parse(args.force.as_deref()))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Scheme:".cyan().bold(),
        resolution.scheme.to_string().white().bold()
    );
    if !resolution.scores.is_empty() {
        println!();
        println!("{}", "Coverage:".yellow().bold());
        for score in &resolution.scores {
            let line = format!(
                "  {:<12} {:>4} matched  {:>6.1}%",
                score.scheme.name(),
                score.matched_count,
                score.coverage_percent
            );
            if score.coverage_percent >= args.coverage_threshold {
                println!("{}", line.green());
            } else {
                println!("{}", line.dimmed());
            }
        }
    }
    println!();

    println!("{}", "Levels:".yellow().bold());
    for (level, count) in resolution.level_counts() {
        println!("  {:<20} {}", level, count.to_string().white());
    }
    println!();

    println!("{} {}", "Normalized:".yellow().bold(), resolution.normalized.join(" "));
    println!();

    print_diagnostics(&resolution.warnings);
    Ok(())
}
