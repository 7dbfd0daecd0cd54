//! Diagnostics emitted while inferring a scheme.

mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
