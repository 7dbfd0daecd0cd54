//! Fuzz target for scheme resolution.
//!
//! This fuzzer tests that resolution:
//! 1. Never panics on arbitrary labels, chart types or force hints
//! 2. Keeps levels, colors and bars parallel
//! 3. Never panics on arbitrary JSON input

#![no_main]

use arbitrary::Arbitrary;
use gradeplot::{resolve, LabelInput};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ResolveInput {
    labels: Vec<String>,
    chart_type: Option<String>,
    force_scheme: Option<String>,
    json: String,
}

fuzz_target!(|input: ResolveInput| {
    // Only process reasonable-sized inputs to avoid OOM
    if input.labels.len() > 10_000 || input.json.len() > 100_000 {
        return;
    }

    let labels = LabelInput::flat(input.labels.iter().map(String::as_str));
    if let Ok(result) = resolve(
        &labels,
        input.chart_type.as_deref(),
        input.force_scheme.as_deref(),
    ) {
        assert_eq!(result.chart.categories.len(), result.chart.values.len());
        assert_eq!(result.chart.categories.len(), result.chart.colors.len());
        assert_eq!(result.resolution.normalized.len(), input.labels.len());
    }

    if let Ok(parsed) = LabelInput::from_json(&input.json) {
        let _ = resolve(&parsed, Some("percentage"), None);
    }
});
