//! Bar chart data built from a resolution.

use serde::Serialize;

use crate::inference::ResolutionResult;
use crate::scheme::{Color, SchemeId};

use super::chart_type::ChartType;
use super::render::ChartRenderer;

/// One bar per level, in the scheme's fixed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub chart_type: ChartType,
    pub scheme: SchemeId,
    /// Category labels, including zero-count levels.
    pub categories: Vec<String>,
    /// Observations per category.
    pub counts: Vec<usize>,
    /// Bar heights: counts or percentages.
    pub values: Vec<f64>,
    /// Bar colors parallel to `categories`.
    pub colors: Vec<Color>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl BarChart {
    /// Aggregate the normalized sequence of a resolution.
    pub fn from_resolution(resolution: &ResolutionResult, chart_type: ChartType) -> Self {
        let (categories, counts): (Vec<String>, Vec<usize>) =
            resolution.level_counts().into_iter().unzip();
        let total: usize = counts.iter().sum();

        let values = counts
            .iter()
            .map(|&count| match chart_type {
                ChartType::Frequency => count as f64,
                ChartType::Percentage if total == 0 => 0.0,
                ChartType::Percentage => 100.0 * count as f64 / total as f64,
            })
            .collect();

        Self {
            chart_type,
            scheme: resolution.scheme,
            categories,
            counts,
            values,
            colors: resolution.colors.clone(),
            x_axis_label: resolution.axis_label.clone(),
            y_axis_label: chart_type.y_axis_label().to_string(),
        }
    }

    /// Number of charted observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Hand the chart to a renderer.
    pub fn render<R: ChartRenderer + ?Sized>(&self, renderer: &R) -> R::Artifact {
        renderer.render_bar_chart(
            &self.categories,
            &self.values,
            &self.colors,
            &self.y_axis_label,
            &self.x_axis_label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::SchemeResolver;

    #[test]
    fn test_frequency_keeps_empty_levels() {
        let resolution = SchemeResolver::new().resolve_labels(&["U", "S", "S", "E"], None);
        let chart = BarChart::from_resolution(&resolution, ChartType::Frequency);

        assert_eq!(
            chart.categories,
            vec!["Unsatisfactory", "Borderline", "Satisfactory", "Excellent"]
        );
        assert_eq!(chart.values, vec![1.0, 0.0, 2.0, 1.0]);
        assert_eq!(chart.colors.len(), 4);
        assert_eq!(chart.x_axis_label, "Grade");
        assert_eq!(chart.y_axis_label, "Frequency");
        assert_eq!(chart.total(), 4);
    }

    #[test]
    fn test_percentage_sums_to_hundred() {
        let resolution = SchemeResolver::new().resolve_labels(&["C", "I", "DK"], None);
        let chart = BarChart::from_resolution(&resolution, ChartType::Percentage);

        let sum: f64 = chart.values.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(chart.x_axis_label, "Response");
        assert_eq!(chart.y_axis_label, "Percentage");
    }
}
