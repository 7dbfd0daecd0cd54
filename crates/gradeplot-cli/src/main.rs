//! GradePlot CLI - scheme-aware bar charts from the command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Plot {
            labels,
            chart_type,
            svg,
            width,
            height,
            title,
            json,
        } => commands::plot::run(
            labels,
            chart_type,
            svg,
            commands::plot::SvgOptions {
                width,
                height,
                title,
            },
            json,
        ),

        Commands::Resolve { labels, json } => commands::resolve::run(labels, json),

        Commands::Schemes { scheme } => commands::schemes::run(scheme),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
