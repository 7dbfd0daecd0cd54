//! Requested bar height measure.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// What the bar heights represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    /// Raw counts per category.
    Frequency,
    /// Share of charted observations per category.
    Percentage,
}

impl ChartType {
    /// Value axis label.
    pub fn y_axis_label(&self) -> &'static str {
        match self {
            ChartType::Frequency => "Frequency",
            ChartType::Percentage => "Percentage",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Frequency => write!(f, "frequency"),
            ChartType::Percentage => write!(f, "percentage"),
        }
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frequency" | "freq" | "f" | "count" | "counts" | "n" => Ok(ChartType::Frequency),
            "percentage" | "percent" | "perc" | "pct" | "p" | "%" => Ok(ChartType::Percentage),
            _ => Err(format!(
                "Unknown chart type: {}. Use frequency or percentage.",
                s
            )),
        }
    }
}
