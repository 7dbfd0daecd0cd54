//! Scheme resolution: estimation, force overrides and normalization.
//!
//! Resolution runs in fixed stages. Unknown values short-circuit to the
//! `Unknown` scheme. Otherwise every catalogued scheme is scored, a single
//! best candidate is estimated, force hints are applied, plausibility is
//! checked against the observed categories, and finally every raw value is
//! mapped to its canonical label.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::diagnostics::{Diagnostic, DiagnosticKind, Severity};
use crate::error::ValidationError;
use crate::input::{LabelInput, Scalar};
use crate::scheme::{
    fallback_colors, Catalog, Color, ForceScheme, SchemeId, OUT_OF_SCHEME_COLOR,
    OUT_OF_SCHEME_LEVEL,
};

use super::tally::{MatchTally, SchemeScore};

/// Configuration for scheme resolution.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Minimum coverage (percent) a candidate scheme must reach.
    pub coverage_threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: 95.0,
        }
    }
}

/// Outcome of coverage scoring, before overrides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "schemes", rename_all = "snake_case")]
pub enum Estimate {
    /// Unknown values were present; no scoring was done.
    Unknown,
    /// Exactly one scheme qualified.
    Single(SchemeId),
    /// Zero or several schemes qualified.
    Ambiguous(Vec<SchemeId>),
}

impl Estimate {
    /// Whether `scheme` is the estimate or one of the tied candidates.
    pub fn admits(&self, scheme: SchemeId) -> bool {
        match self {
            Estimate::Unknown => false,
            Estimate::Single(s) => *s == scheme,
            Estimate::Ambiguous(candidates) => candidates.contains(&scheme),
        }
    }
}

/// Result of resolving one label set.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    /// Finalized scheme.
    pub scheme: SchemeId,
    /// Estimate before overrides were applied.
    pub estimate: Estimate,
    /// Force hint that was in effect, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_scheme: Option<ForceScheme>,
    /// Canonical label per observation. Raw text under `Unknown`, and
    /// [`OUT_OF_SCHEME_LEVEL`] for values outside a known scheme.
    pub normalized: Vec<String>,
    /// Category axis order. Zero-count levels are kept; a trailing
    /// [`OUT_OF_SCHEME_LEVEL`] appears only when it has observations.
    pub levels: Vec<String>,
    /// Display colors parallel to `levels`.
    pub colors: Vec<Color>,
    /// Category axis label.
    pub axis_label: String,
    /// Coverage per catalogued scheme (empty when unknown values short-circuit).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub scores: Vec<SchemeScore>,
    /// Diagnostics in emission order.
    pub warnings: Vec<Diagnostic>,
}

impl ResolutionResult {
    /// Occurrences of each level, in level order.
    pub fn level_counts(&self) -> Vec<(String, usize)> {
        self.levels
            .iter()
            .map(|level| {
                let count = self.normalized.iter().filter(|n| *n == level).count();
                (level.clone(), count)
            })
            .collect()
    }

    /// Observations that fall on one of the levels.
    pub fn charted_count(&self) -> usize {
        self.level_counts().iter().map(|(_, c)| c).sum()
    }

    /// Whether a diagnostic of the given kind was emitted.
    pub fn has_warning(&self, kind: DiagnosticKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// Infers the scheme of a label set and normalizes it.
pub struct SchemeResolver {
    catalog: &'static Catalog,
    config: ResolverConfig,
}

impl SchemeResolver {
    /// Create a resolver with default configuration.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            catalog: Catalog::global(),
            config,
        }
    }

    /// Validate the input shape, then resolve it.
    pub fn resolve(
        &self,
        input: &LabelInput,
        force: Option<ForceScheme>,
    ) -> Result<ResolutionResult, ValidationError> {
        let values = input.validate()?;
        Ok(self.resolve_values(values, force))
    }

    /// Resolve scalars already known to form a flat sequence.
    pub fn resolve_values(&self, values: &[Scalar], force: Option<ForceScheme>) -> ResolutionResult {
        let labels: Vec<String> = values.iter().map(Scalar::to_text).collect();
        self.resolve_labels(&labels, force)
    }

    /// Resolve raw label text.
    pub fn resolve_labels<S: AsRef<str>>(
        &self,
        labels: &[S],
        force: Option<ForceScheme>,
    ) -> ResolutionResult {
        let raw: Vec<&str> = labels.iter().map(|l| l.as_ref()).collect();
        let tally = MatchTally::from_values(&raw);

        let unknown = tally.unknown_values(self.catalog);
        if !unknown.is_empty() {
            let occurrences: usize = unknown.iter().map(|v| tally.count(v)).sum();
            debug!(unknown = ?unknown, "unknown values present, skipping inference");
            let warnings = vec![Diagnostic::unknown_values(unknown, occurrences)];
            return self.finish(&raw, &tally, SchemeId::Unknown, Estimate::Unknown, force, Vec::new(), warnings);
        }

        let scores = tally.scores(self.catalog);
        for score in &scores {
            debug!(
                scheme = %score.scheme,
                matched = score.matched_count,
                coverage = score.coverage_percent,
                "scheme coverage"
            );
        }

        let estimate = self.estimate(&scores);
        let mut warnings = Vec::new();
        let scheme = self.apply_force(&estimate, force, &tally, &mut warnings);
        self.check_plausibility(scheme, &estimate, &tally, &mut warnings);

        self.finish(&raw, &tally, scheme, estimate, force, scores, warnings)
    }

    /// Pick the single scheme with the highest match count and enough coverage.
    fn estimate(&self, scores: &[SchemeScore]) -> Estimate {
        let max = scores.iter().map(|s| s.matched_count).max().unwrap_or(0);
        let candidates: Vec<SchemeId> = scores
            .iter()
            .filter(|s| {
                max > 0
                    && s.matched_count == max
                    && s.coverage_percent >= self.config.coverage_threshold
            })
            .map(|s| s.scheme)
            .collect();

        if candidates.len() == 1 {
            Estimate::Single(candidates[0])
        } else {
            Estimate::Ambiguous(candidates)
        }
    }

    /// Apply the caller's force hint on top of the estimate.
    fn apply_force(
        &self,
        estimate: &Estimate,
        force: Option<ForceScheme>,
        tally: &MatchTally,
        warnings: &mut Vec<Diagnostic>,
    ) -> SchemeId {
        let Some(force) = force else {
            return self.natural(estimate, warnings);
        };
        let requested = force.scheme();

        match force.reduction() {
            Some((full, absent_level)) => {
                // Narrow only when the full scheme is in play and the
                // distinguishing level was never observed.
                if estimate.admits(full) && tally.level_count(self.catalog, full, absent_level) == 0 {
                    debug!(%full, %requested, "narrowing to reduced scheme");
                    return requested;
                }
                if let Estimate::Single(estimated) = estimate {
                    if estimated.catalog_scheme() != full {
                        warnings.push(Diagnostic::force_not_applied(requested, *estimated));
                    }
                }
                self.natural(estimate, warnings)
            }
            // CIDK and CNINC differ only where "C" is not the whole story,
            // so the hint is taken whenever no single scheme qualified.
            None => match estimate {
                Estimate::Ambiguous(_) => {
                    debug!(%requested, "force hint resolves ambiguity");
                    requested
                }
                _ => self.natural(estimate, warnings),
            },
        }
    }

    /// The scheme the estimate yields on its own.
    fn natural(&self, estimate: &Estimate, warnings: &mut Vec<Diagnostic>) -> SchemeId {
        match estimate {
            Estimate::Single(scheme) => *scheme,
            Estimate::Ambiguous(candidates) => {
                warnings.push(Diagnostic::ambiguous(candidates));
                SchemeId::Unknown
            }
            Estimate::Unknown => SchemeId::Unknown,
        }
    }

    /// Warn when the finalized scheme is contradicted by missing categories.
    fn check_plausibility(
        &self,
        scheme: SchemeId,
        estimate: &Estimate,
        tally: &MatchTally,
        warnings: &mut Vec<Diagnostic>,
    ) {
        let missing = |label: &str| tally.level_count(self.catalog, scheme, label) == 0;

        match scheme {
            SchemeId::Ubse => {
                if missing("Borderline") {
                    warnings.push(Diagnostic::missing_level(scheme, "Borderline", SchemeId::Use));
                }
                if missing("Excellent") {
                    warnings.push(Diagnostic::missing_level(scheme, "Excellent", SchemeId::Ubs));
                }
            }
            SchemeId::Pfe => {
                if missing("Excellent") {
                    warnings.push(Diagnostic::missing_level(scheme, "Excellent", SchemeId::Pf));
                }
            }
            SchemeId::Unknown => {
                if estimate.admits(SchemeId::Cidk) && estimate.admits(SchemeId::Cninc) {
                    warnings.push(Diagnostic::unresolved_overlap());
                }
            }
            _ => {}
        }
    }

    /// Normalize every observation and assemble the result.
    #[allow(clippy::too_many_arguments)]
    fn finish(
        &self,
        raw: &[&str],
        tally: &MatchTally,
        scheme: SchemeId,
        estimate: Estimate,
        force: Option<ForceScheme>,
        scores: Vec<SchemeScore>,
        mut warnings: Vec<Diagnostic>,
    ) -> ResolutionResult {
        let (normalized, levels, colors) = if scheme.is_known() {
            let levels = self.catalog.levels_of(scheme);
            let normalized: Vec<String> = raw
                .iter()
                .map(|value| match self.catalog.canonical(value, scheme) {
                    Some(label) if levels.contains(&label) => label.to_string(),
                    _ => OUT_OF_SCHEME_LEVEL.to_string(),
                })
                .collect();

            let outside: Vec<String> = tally
                .iter()
                .filter(|(value, _)| {
                    !matches!(self.catalog.canonical(value, scheme), Some(label) if levels.contains(&label))
                })
                .map(|(value, _)| value.to_string())
                .collect();
            let mut level_names: Vec<String> = levels.iter().map(|l| l.to_string()).collect();
            let mut colors = self.catalog.colors_of(scheme).to_vec();
            if !outside.is_empty() {
                let occurrences: usize = outside.iter().map(|v| tally.count(v)).sum();
                warnings.push(Diagnostic::out_of_scheme(scheme, outside, occurrences));
                level_names.push(OUT_OF_SCHEME_LEVEL.to_string());
                colors.push(OUT_OF_SCHEME_COLOR);
            }

            (normalized, level_names, colors)
        } else {
            let levels: Vec<String> = tally.iter().map(|(value, _)| value.to_string()).collect();
            let colors = fallback_colors(levels.len());
            (raw.iter().map(|v| v.to_string()).collect(), levels, colors)
        };

        info!(%scheme, observations = raw.len(), warnings = warnings.len(), "resolved scheme");
        for warning in warnings.iter().filter(|w| w.severity == Severity::Warning) {
            warn!(kind = warning.kind.label(), "{}", warning.message);
        }

        ResolutionResult {
            scheme,
            estimate,
            force_scheme: force,
            normalized,
            levels,
            colors,
            axis_label: scheme.axis_label().to_string(),
            scores,
            warnings,
        }
    }
}

impl Default for SchemeResolver {
    fn default() -> Self {
        Self::new()
    }
}
