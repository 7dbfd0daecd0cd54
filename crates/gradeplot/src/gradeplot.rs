//! Main GradePlot struct and public API.

use serde::Serialize;
use tracing::debug;

use crate::chart::{BarChart, ChartType};
use crate::diagnostics::Severity;
use crate::error::{Argument, Result, ValidationError};
use crate::inference::{ResolutionResult, ResolverConfig, SchemeResolver};
use crate::input::{LabelInput, Scalar};
use crate::scheme::ForceScheme;

/// Configuration for GradePlot.
#[derive(Debug, Clone, Default)]
pub struct GradePlotConfig {
    /// Scheme resolution configuration.
    pub resolver: ResolverConfig,
}

/// Result of plotting one label set.
#[derive(Debug, Clone, Serialize)]
pub struct PlotResult {
    /// Inferred scheme, normalized labels and diagnostics.
    pub resolution: ResolutionResult,
    /// Aggregated bars ready for a renderer.
    pub chart: BarChart,
    /// Summary statistics.
    pub summary: PlotSummary,
}

/// Summary of a plot call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSummary {
    /// Number of raw observations supplied.
    pub total_observations: usize,
    /// Observations that landed on a chart category.
    pub charted_observations: usize,
    /// Number of distinct normalized labels.
    pub distinct_values: usize,
    /// Diagnostics with warning severity.
    pub warning_count: usize,
    /// Diagnostics with info severity.
    pub info_count: usize,
}

/// The main entry point: validate, resolve and aggregate.
pub struct GradePlot {
    resolver: SchemeResolver,
}

impl GradePlot {
    /// Create a new GradePlot instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(GradePlotConfig::default())
    }

    /// Create a GradePlot instance with custom configuration.
    pub fn with_config(config: GradePlotConfig) -> Self {
        Self {
            resolver: SchemeResolver::with_config(config.resolver),
        }
    }

    /// Resolve the scheme of `input` and build a bar chart of it.
    ///
    /// `chart_type` accepts the usual spellings of frequency and percentage.
    /// An unrecognised `force_scheme` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingInput`] naming every absent
    /// argument, or [`ValidationError::WrongFormat`] naming every malformed
    /// one. Missing arguments are reported before malformed ones.
    pub fn plot(
        &self,
        input: &LabelInput,
        chart_type: Option<&str>,
        force_scheme: Option<&str>,
    ) -> Result<PlotResult> {
        let (values, chart_type) = validate(input, chart_type)?;
        let force = ForceScheme::parse(force_scheme);
        debug!(observations = values.len(), %chart_type, ?force, "plotting");

        let resolution = self.resolver.resolve_values(values, force);
        let chart = BarChart::from_resolution(&resolution, chart_type);
        let summary = summarize(&resolution, &chart);

        Ok(PlotResult {
            resolution,
            chart,
            summary,
        })
    }
}

impl Default for GradePlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Plot with default configuration.
pub fn resolve(
    input: &LabelInput,
    chart_type: Option<&str>,
    force_scheme: Option<&str>,
) -> Result<PlotResult> {
    GradePlot::new().plot(input, chart_type, force_scheme)
}

/// Check both arguments together so one error names every offender.
fn validate<'a>(
    input: &'a LabelInput,
    chart_type: Option<&str>,
) -> std::result::Result<(&'a [Scalar], ChartType), ValidationError> {
    let mut missing = Vec::new();
    if input.is_absent() {
        missing.push(Argument::Values);
    }
    if chart_type.is_none() {
        missing.push(Argument::ChartType);
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingInput { arguments: missing });
    }

    let values = input.validate();
    let parsed = chart_type.and_then(|raw| raw.parse::<ChartType>().ok());

    match (values, parsed) {
        (Ok(values), Some(chart_type)) => Ok((values, chart_type)),
        (values, parsed) => {
            let mut arguments = Vec::new();
            if values.is_err() {
                arguments.push(Argument::Values);
            }
            if parsed.is_none() {
                arguments.push(Argument::ChartType);
            }
            Err(ValidationError::WrongFormat { arguments })
        }
    }
}

fn summarize(resolution: &ResolutionResult, chart: &BarChart) -> PlotSummary {
    let count = |severity: Severity| {
        resolution
            .warnings
            .iter()
            .filter(|w| w.severity == severity)
            .count()
    };

    let mut distinct: Vec<&str> = resolution.normalized.iter().map(String::as_str).collect();
    distinct.sort_unstable();
    distinct.dedup();

    PlotSummary {
        total_observations: resolution.normalized.len(),
        charted_observations: chart.total(),
        distinct_values: distinct.len(),
        warning_count: count(Severity::Warning),
        info_count: count(Severity::Info),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradeplotError;
    use crate::input::LabelTable;
    use crate::scheme::SchemeId;

    fn validation_error(result: Result<PlotResult>) -> ValidationError {
        match result {
            Err(GradeplotError::Validation(err)) => err,
            other => panic!("expected validation error, got {:?}", other.map(|r| r.summary)),
        }
    }

    #[test]
    fn test_plot_simple_grades() {
        let input = LabelInput::flat(["U", "B", "S", "S", "E"]);
        let result = resolve(&input, Some("frequency"), None).unwrap();

        assert_eq!(result.resolution.scheme, SchemeId::Ubse);
        assert_eq!(result.chart.values, vec![1.0, 1.0, 2.0, 1.0]);
        assert_eq!(result.summary.total_observations, 5);
        assert_eq!(result.summary.charted_observations, 5);
        assert_eq!(result.summary.warning_count, 0);
    }

    #[test]
    fn test_missing_both_arguments() {
        let err = validation_error(resolve(&LabelInput::Absent, None, None));
        assert_eq!(
            err,
            ValidationError::MissingInput {
                arguments: vec![Argument::Values, Argument::ChartType]
            }
        );
    }

    #[test]
    fn test_missing_reported_before_wrong_format() {
        let table = LabelTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["U".into(), "S".into()]],
        );
        let err = validation_error(resolve(&LabelInput::Tabular(table), None, None));
        assert_eq!(err.arguments(), &[Argument::ChartType]);
        assert!(matches!(err, ValidationError::MissingInput { .. }));
    }

    #[test]
    fn test_wrong_format_names_every_offender() {
        let input = LabelInput::flat(Vec::<&str>::new());
        let err = validation_error(resolve(&input, Some("pie"), None));
        assert_eq!(
            err,
            ValidationError::WrongFormat {
                arguments: vec![Argument::Values, Argument::ChartType]
            }
        );
    }

    #[test]
    fn test_unrecognised_force_is_ignored() {
        let input = LabelInput::flat(["U", "S", "S", "E"]);
        let result = resolve(&input, Some("perc"), Some("BOGUS")).unwrap();
        assert_eq!(result.resolution.scheme, SchemeId::Ubse);
        assert!(result.resolution.force_scheme.is_none());
        assert_eq!(result.summary.info_count, 1);
    }

    #[test]
    fn test_numeric_scalars_are_matched_as_text() {
        let input = LabelInput::flat(vec![Scalar::Integer(1), Scalar::Integer(2)]);
        let result = resolve(&input, Some("f"), None).unwrap();
        assert_eq!(result.resolution.scheme, SchemeId::Unknown);
        assert_eq!(result.chart.categories, vec!["1", "2"]);
    }
}
