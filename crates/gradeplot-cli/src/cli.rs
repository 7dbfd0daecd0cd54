//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// GradePlot: scheme-aware bar charts for grade and survey labels
#[derive(Parser)]
#[command(name = "gradeplot")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer the scheme of the labels and draw a bar chart
    Plot {
        #[command(flatten)]
        labels: LabelArgs,

        /// Chart type: frequency or percentage (accepts f, freq, perc, pct, ...)
        #[arg(short = 't', long = "type", value_name = "CHART_TYPE")]
        chart_type: Option<String>,

        /// Write the chart as an SVG document to this path
        #[arg(long, value_name = "PATH")]
        svg: Option<PathBuf>,

        /// SVG width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// SVG height in pixels
        #[arg(long, default_value = "400")]
        height: u32,

        /// SVG chart title
        #[arg(long)]
        title: Option<String>,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Infer and report the scheme of the labels without charting
    Resolve {
        #[command(flatten)]
        labels: LabelArgs,

        /// Output the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the catalogued schemes and their spellings
    Schemes {
        /// Show only this scheme (e.g. UBSE, CIDK)
        #[arg(value_name = "SCHEME")]
        scheme: Option<String>,
    },
}

/// Label input and resolution options shared by `plot` and `resolve`.
#[derive(Args)]
pub struct LabelArgs {
    /// Raw labels, e.g. U B S S E
    #[arg(value_name = "LABELS", conflicts_with = "input_json")]
    pub labels: Vec<String>,

    /// Labels as a JSON document (array of scalars, or a table to be rejected)
    #[arg(long, value_name = "JSON")]
    pub input_json: Option<String>,

    /// Force a scheme to break ties: USE, UBS, PF, CIDK or CNINC
    #[arg(short, long, value_name = "SCHEME")]
    pub force: Option<String>,

    /// Minimum coverage (percent) a scheme needs to be chosen
    #[arg(long, default_value = "95.0")]
    pub coverage_threshold: f64,
}
