//! Error types for the gradeplot library.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A caller-supplied argument of the public entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    /// The raw label sequence.
    Values,
    /// The requested chart type.
    ChartType,
}

impl Argument {
    /// Name of the argument as callers spell it.
    pub fn name(&self) -> &'static str {
        match self {
            Argument::Values => "values",
            Argument::ChartType => "chart_type",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn join(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(Argument::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fatal input problems. No chart is produced when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required argument was not given at all.
    #[error("missing required argument(s): {}", join(.arguments))]
    MissingInput { arguments: Vec<Argument> },

    /// An argument was given but is not a flat, non-empty scalar sequence
    /// (or not a recognised chart type).
    #[error("argument(s) in the wrong format: {}", join(.arguments))]
    WrongFormat { arguments: Vec<Argument> },
}

impl ValidationError {
    /// The arguments this error names.
    pub fn arguments(&self) -> &[Argument] {
        match self {
            ValidationError::MissingInput { arguments } => arguments,
            ValidationError::WrongFormat { arguments } => arguments,
        }
    }
}

/// Main error type for gradeplot operations.
#[derive(Debug, Error)]
pub enum GradeplotError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing a rendered chart.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for gradeplot operations.
pub type Result<T> = std::result::Result<T, GradeplotError>;
