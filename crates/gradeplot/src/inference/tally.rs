//! Occurrence counting and per-scheme coverage scoring.

use indexmap::IndexMap;
use serde::Serialize;

use crate::scheme::{Catalog, SchemeId};

/// Coverage of the observations by one scheme's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SchemeScore {
    pub scheme: SchemeId,
    /// Observations whose raw value belongs to the scheme.
    pub matched_count: usize,
    /// `100 * matched_count / total`.
    pub coverage_percent: f64,
}

/// Occurrence count of each distinct raw value, in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct MatchTally {
    counts: IndexMap<String, usize>,
    total: usize,
}

impl MatchTally {
    /// Count the raw values of one resolution call.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in values {
            *counts.entry(value.as_ref().to_string()).or_insert(0) += 1;
        }
        Self {
            counts,
            total: values.len(),
        }
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct raw values.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Distinct raw values with their counts, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(value, count)| (value.as_str(), *count))
    }

    /// Occurrences of a raw value.
    pub fn count(&self, raw_value: &str) -> usize {
        self.counts.get(raw_value).copied().unwrap_or(0)
    }

    /// Distinct values that no scheme knows, in first-appearance order.
    pub fn unknown_values(&self, catalog: &Catalog) -> Vec<String> {
        self.counts
            .keys()
            .filter(|value| !catalog.contains(value))
            .cloned()
            .collect()
    }

    /// Observations whose value canonicalizes to `label` under `scheme`.
    pub fn level_count(&self, catalog: &Catalog, scheme: SchemeId, label: &str) -> usize {
        self.iter()
            .filter(|(value, _)| catalog.canonical(value, scheme) == Some(label))
            .map(|(_, count)| count)
            .sum()
    }

    /// Score every scheme that owns catalog entries.
    pub fn scores(&self, catalog: &Catalog) -> Vec<SchemeScore> {
        let mut matched: IndexMap<SchemeId, usize> = catalog
            .schemes()
            .filter(|s| s.catalog_scheme() == *s)
            .map(|s| (s, 0))
            .collect();

        for (value, count) in self.iter() {
            for entry in catalog.lookup(value) {
                *matched.entry(entry.scheme).or_insert(0) += count;
            }
        }

        matched
            .into_iter()
            .map(|(scheme, matched_count)| SchemeScore {
                scheme,
                matched_count,
                coverage_percent: if self.total == 0 {
                    0.0
                } else {
                    100.0 * matched_count as f64 / self.total as f64
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(scores: &[SchemeScore], scheme: SchemeId) -> SchemeScore {
        *scores.iter().find(|s| s.scheme == scheme).unwrap()
    }

    #[test]
    fn test_counts_preserve_first_appearance() {
        let tally = MatchTally::from_values(&["S", "U", "S", "E"]);
        let order: Vec<_> = tally.iter().collect();
        assert_eq!(order, vec![("S", 2), ("U", 1), ("E", 1)]);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.distinct_count(), 3);
    }

    #[test]
    fn test_unknown_values_in_order() {
        let tally = MatchTally::from_values(&["U", "W", "B", "Q", "W"]);
        assert_eq!(tally.unknown_values(Catalog::global()), vec!["W", "Q"]);
    }

    #[test]
    fn test_shared_values_count_for_every_scheme() {
        let tally = MatchTally::from_values(&["U", "B", "S", "S", "E"]);
        let scores = tally.scores(Catalog::global());

        let ubse = score_of(&scores, SchemeId::Ubse);
        assert_eq!(ubse.matched_count, 5);
        assert!((ubse.coverage_percent - 100.0).abs() < 1e-9);

        let pfe = score_of(&scores, SchemeId::Pfe);
        assert_eq!(pfe.matched_count, 1);
        assert!((pfe.coverage_percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduced_schemes_are_not_scored() {
        let tally = MatchTally::from_values(&["U", "S"]);
        let scores = tally.scores(Catalog::global());
        assert!(scores.iter().all(|s| s.scheme != SchemeId::Use));
        assert!(scores.iter().all(|s| s.scheme != SchemeId::Unknown));
    }

    #[test]
    fn test_level_count_through_spellings() {
        let tally = MatchTally::from_values(&["b", "Borderline", "S", "BL"]);
        let catalog = Catalog::global();
        assert_eq!(tally.level_count(catalog, SchemeId::Ubse, "Borderline"), 3);
        assert_eq!(tally.level_count(catalog, SchemeId::Ubse, "Excellent"), 0);
    }
}
