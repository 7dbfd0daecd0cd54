//! GradePlot: scheme-aware bar charts for categorical grade and survey labels.
//!
//! Given a flat sequence of raw labels (letters, abbreviations, full words in
//! any of their catalogued spellings), GradePlot infers which fixed grading or
//! response scheme the labels belong to, normalizes every label to the
//! scheme's canonical spelling, and aggregates them into a bar chart with the
//! scheme's category order and colors.
//!
//! # Core Principles
//!
//! - **Best effort**: unknown or ambiguous labels still produce a chart, with
//!   a diagnostic explaining what was guessed
//! - **Fixed vocabulary**: schemes and spellings come from a static catalog
//! - **Explicit overrides**: callers break ties with a force hint
//!
//! # Example
//!
//! ```
//! use gradeplot::{LabelInput, SchemeId};
//!
//! let input = LabelInput::flat(["U", "B", "S", "S", "E"]);
//! let result = gradeplot::resolve(&input, Some("frequency"), None).unwrap();
//!
//! assert_eq!(result.resolution.scheme, SchemeId::Ubse);
//! assert_eq!(result.chart.values, vec![1.0, 1.0, 2.0, 1.0]);
//! ```

pub mod chart;
pub mod diagnostics;
pub mod error;
pub mod inference;
pub mod input;
pub mod scheme;

mod gradeplot;

pub use crate::gradeplot::{resolve, GradePlot, GradePlotConfig, PlotResult, PlotSummary};
pub use chart::{BarChart, ChartRenderer, ChartType, SvgConfig, SvgRenderer};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::{Argument, GradeplotError, Result, ValidationError};
pub use inference::{Estimate, ResolutionResult, ResolverConfig, SchemeResolver};
pub use input::{LabelInput, LabelTable, Scalar};
pub use scheme::{Catalog, Color, ForceScheme, SchemeId, OUT_OF_SCHEME_LEVEL};
