//! Non-fatal findings attached to a resolution.

use serde::Serialize;

use crate::scheme::SchemeId;

/// Kind of finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Values that match no catalog entry.
    UnknownValue,
    /// No single scheme qualified and no override applied.
    AmbiguousScheme,
    /// The chosen scheme is contradicted by missing categories.
    Plausibility,
    /// A force hint from the wrong family; the estimate was kept.
    ForceNotApplied,
    /// CIDK and CNINC could not be told apart.
    UnresolvedOverlap,
    /// Catalogued values outside the chosen scheme; charted as NA.
    OutOfScheme,
}

impl DiagnosticKind {
    /// Get a human-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownValue => "Unknown Value",
            DiagnosticKind::AmbiguousScheme => "Ambiguous Scheme",
            DiagnosticKind::Plausibility => "Plausibility",
            DiagnosticKind::ForceNotApplied => "Force Not Applied",
            DiagnosticKind::UnresolvedOverlap => "Unresolved Overlap",
            DiagnosticKind::OutOfScheme => "Out Of Scheme",
        }
    }

    /// Default severity for this kind.
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::Plausibility => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only; the chart is as requested.
    Info,
    /// The chart was degraded or guessed.
    Warning,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
        }
    }
}

/// A warning emitted while resolving a label set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Offending values, in first-appearance order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub values: Vec<String>,
    /// Number of observations affected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<usize>,
    /// Scheme the caller may have meant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_scheme: Option<SchemeId>,
}

impl Diagnostic {
    /// Create a diagnostic with the kind's default severity.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
            values: Vec::new(),
            occurrences: None,
            suggested_scheme: None,
        }
    }

    /// Set the offending values.
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    /// Set occurrences.
    pub fn with_occurrences(mut self, count: usize) -> Self {
        self.occurrences = Some(count);
        self
    }

    /// Set the suggested scheme.
    pub fn with_suggestion(mut self, scheme: SchemeId) -> Self {
        self.suggested_scheme = Some(scheme);
        self
    }

    pub fn unknown_values(values: Vec<String>, occurrences: usize) -> Self {
        Self::new(
            DiagnosticKind::UnknownValue,
            format!(
                "values not found in any known scheme: {}; using levels as they appear",
                values.join(", ")
            ),
        )
        .with_values(values)
        .with_occurrences(occurrences)
    }

    pub fn ambiguous(candidates: &[SchemeId]) -> Self {
        let detail = if candidates.is_empty() {
            "no scheme covers the values".to_string()
        } else {
            format!("candidates: {}", join_schemes(candidates))
        };
        Self::new(
            DiagnosticKind::AmbiguousScheme,
            format!(
                "could not determine scheme, using levels as they appear ({}); \
                 pass force_scheme to choose one",
                detail
            ),
        )
    }

    pub fn missing_level(scheme: SchemeId, level: &str, suggestion: SchemeId) -> Self {
        Self::new(
            DiagnosticKind::Plausibility,
            format!(
                "scheme {} detected but no '{}' observations found; \
                 {} might have been intended (pass force_scheme = {})",
                scheme, level, suggestion, suggestion
            ),
        )
        .with_values(vec![level.to_string()])
        .with_suggestion(suggestion)
    }

    pub fn force_not_applied(requested: SchemeId, estimate: SchemeId) -> Self {
        Self::new(
            DiagnosticKind::ForceNotApplied,
            format!(
                "force_scheme {} does not fit these values; using best guess {}",
                requested, estimate
            ),
        )
        .with_suggestion(estimate)
    }

    pub fn unresolved_overlap() -> Self {
        Self::new(
            DiagnosticKind::UnresolvedOverlap,
            format!(
                "values fit both {} and {}; pass force_scheme = {} or {}",
                SchemeId::Cidk,
                SchemeId::Cninc,
                SchemeId::Cidk,
                SchemeId::Cninc
            ),
        )
    }

    pub fn out_of_scheme(scheme: SchemeId, values: Vec<String>, occurrences: usize) -> Self {
        Self::new(
            DiagnosticKind::OutOfScheme,
            format!(
                "{} observation(s) not part of scheme {} are charted as NA: {}",
                occurrences,
                scheme,
                values.join(", ")
            ),
        )
        .with_values(values)
        .with_occurrences(occurrences)
    }
}

fn join_schemes(schemes: &[SchemeId]) -> String {
    schemes
        .iter()
        .map(SchemeId::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_values_lists_every_value() {
        let diag = Diagnostic::unknown_values(vec!["W".into(), "X".into()], 3);
        assert_eq!(diag.kind, DiagnosticKind::UnknownValue);
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.message.contains("W, X"));
        assert_eq!(diag.occurrences, Some(3));
    }

    #[test]
    fn test_missing_level_is_informational() {
        let diag = Diagnostic::missing_level(SchemeId::Ubse, "Borderline", SchemeId::Use);
        assert_eq!(diag.severity, Severity::Info);
        assert_eq!(diag.suggested_scheme, Some(SchemeId::Use));
        assert!(diag.message.contains("Borderline"));
    }

    #[test]
    fn test_ambiguous_names_candidates() {
        let diag = Diagnostic::ambiguous(&[SchemeId::Cidk, SchemeId::Cninc]);
        assert!(diag.message.contains("could not determine scheme"));
        assert!(diag.message.contains("CIDK, CNINC"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
    }
}
