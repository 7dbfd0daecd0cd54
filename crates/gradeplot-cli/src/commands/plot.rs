//! Plot command - infer the scheme and draw the bar chart.

use std::path::PathBuf;

use colored::Colorize;
use gradeplot::{
    BarChart, ChartType, GradePlot, GradePlotConfig, GradeplotError, ResolverConfig, SvgConfig,
    SvgRenderer,
};

use super::{label_input, print_diagnostics};
use crate::cli::LabelArgs;

/// Layout flags for `--svg`.
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
}

const BAR_WIDTH: usize = 40;

pub fn run(
    args: LabelArgs,
    chart_type: Option<String>,
    svg: Option<PathBuf>,
    svg_options: SvgOptions,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = label_input(&args)?;
    let plotter = GradePlot::with_config(GradePlotConfig {
        resolver: ResolverConfig {
            coverage_threshold: args.coverage_threshold,
        },
    });
    let result = plotter.plot(&input, chart_type.as_deref(), args.force.as_deref())?;

    if let Some(path) = &svg {
        let renderer = SvgRenderer::with_config(SvgConfig {
            width: svg_options.width,
            height: svg_options.height,
            title: svg_options.title,
            ..SvgConfig::default()
        });
        let document = result.chart.render(&renderer);
        std::fs::write(path, document).map_err(|source| GradeplotError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote SVG chart");
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {} ({} observations, {} charted)",
        "Scheme:".cyan().bold(),
        result.resolution.scheme.to_string().white().bold(),
        result.summary.total_observations,
        result.summary.charted_observations
    );
    println!();

    print_bars(&result.chart);
    println!();

    print_diagnostics(&result.resolution.warnings);

    if let Some(path) = svg {
        println!("{} {}", "SVG written to".green(), path.display().to_string().white());
    }

    Ok(())
}

/// Draw the chart as horizontal bars in the terminal.
fn print_bars(chart: &BarChart) {
    println!(
        "{} by {}",
        chart.y_axis_label.yellow().bold(),
        chart.x_axis_label.yellow().bold()
    );

    let label_width = chart.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    let max_value = chart.values.iter().copied().fold(0.0_f64, f64::max);

    for (i, category) in chart.categories.iter().enumerate() {
        let value = chart.values[i];
        let filled = if max_value > 0.0 {
            ((value / max_value) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let color = chart.colors[i];
        let bar = "█".repeat(filled).truecolor(color.r(), color.g(), color.b());
        let value_text = match chart.chart_type {
            ChartType::Frequency => format!("{}", value as usize),
            ChartType::Percentage => format!("{:.1}%", value),
        };
        println!("  {:<width$}  {} {}", category, bar, value_text.white(), width = label_width);
    }
}
