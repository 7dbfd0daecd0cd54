//! Integration tests for the gradeplot public API.

use gradeplot::{
    resolve, Argument, Catalog, ChartRenderer, Color, DiagnosticKind, Estimate, ForceScheme,
    GradePlot, GradePlotConfig, GradeplotError, LabelInput, PlotResult, ResolverConfig,
    SchemeId, SchemeResolver, Severity, SvgRenderer, ValidationError, OUT_OF_SCHEME_LEVEL,
};

/// Plot raw labels as a frequency chart.
fn plot(labels: &[&str], force: Option<&str>) -> PlotResult {
    resolve(&LabelInput::flat(labels.iter().copied()), Some("frequency"), force)
        .expect("plot should succeed")
}

fn validation_error(result: gradeplot::Result<PlotResult>) -> ValidationError {
    match result {
        Err(GradeplotError::Validation(err)) => err,
        Err(other) => panic!("expected validation error, got {}", other),
        Ok(_) => panic!("expected validation error, got a chart"),
    }
}

// =============================================================================
// Scheme detection
// =============================================================================

#[test]
fn test_pure_ubse_has_no_warnings() {
    let result = plot(&["U", "B", "S", "S", "E"], None);

    assert_eq!(result.resolution.scheme, SchemeId::Ubse);
    assert!(result.resolution.warnings.is_empty());
    assert_eq!(
        result.chart.categories,
        vec!["Unsatisfactory", "Borderline", "Satisfactory", "Excellent"]
    );
    assert_eq!(result.chart.x_axis_label, "Grade");
}

#[test]
fn test_every_scheme_detected_from_its_own_levels() {
    let catalog = Catalog::global();
    for scheme in catalog.schemes() {
        if scheme.catalog_scheme() != scheme {
            continue;
        }
        let levels = catalog.levels_of(scheme);
        let result = plot(levels, None);
        assert_eq!(result.resolution.scheme, scheme, "levels of {}", scheme);
        assert!(
            !result.resolution.has_warning(DiagnosticKind::AmbiguousScheme),
            "{} should not be ambiguous",
            scheme
        );
    }
}

#[test]
fn test_unknown_value_forces_unknown_scheme() {
    let result = plot(&["U", "B", "S", "E", "E", "W"], None);

    assert_eq!(result.resolution.scheme, SchemeId::Unknown);
    assert_eq!(result.resolution.estimate, Estimate::Unknown);
    assert_eq!(result.resolution.warnings.len(), 1);

    let warning = &result.resolution.warnings[0];
    assert_eq!(warning.kind, DiagnosticKind::UnknownValue);
    assert_eq!(warning.values, vec!["W"]);
    assert!(warning.message.contains("W"));

    // Levels follow first appearance, raw values are kept.
    assert_eq!(result.chart.categories, vec!["U", "B", "S", "E", "W"]);
    assert_eq!(result.chart.values, vec![1.0, 1.0, 1.0, 2.0, 1.0]);
    assert_eq!(result.chart.x_axis_label, "Unknown Scheme");
}

#[test]
fn test_unknown_values_enumerated_once_each() {
    let result = plot(&["X", "U", "Y", "X", "Z"], None);
    let warning = &result.resolution.warnings[0];
    assert_eq!(warning.values, vec!["X", "Y", "Z"]);
    assert_eq!(warning.occurrences, Some(4));
}

#[test]
fn test_mixed_casing_round_trip() {
    let messy = plot(&["u", "e", "b", "satisfactory", "S", "s", "E"], None);
    let clean = plot(&["U", "B", "S", "S", "E"], None);

    assert_eq!(messy.resolution.scheme, clean.resolution.scheme);
    assert!(messy.resolution.warnings.is_empty());

    let mut messy_set = messy.resolution.normalized.clone();
    messy_set.sort();
    messy_set.dedup();
    let mut clean_set = clean.resolution.normalized.clone();
    clean_set.sort();
    clean_set.dedup();
    assert_eq!(messy_set, clean_set);

    assert_eq!(
        messy.resolution.normalized,
        vec![
            "Unsatisfactory",
            "Excellent",
            "Borderline",
            "Satisfactory",
            "Satisfactory",
            "Satisfactory",
            "Excellent"
        ]
    );
}

#[test]
fn test_numeric_labels_are_unknown() {
    let input = LabelInput::flat([1_i64, 2, 2, 3]);
    let result = resolve(&input, Some("frequency"), None).unwrap();
    assert_eq!(result.resolution.scheme, SchemeId::Unknown);
    assert_eq!(result.chart.categories, vec!["1", "2", "3"]);
}

// =============================================================================
// Force overrides and plausibility
// =============================================================================

#[test]
fn test_missing_borderline_suggests_use() {
    let result = plot(&["U", "S", "S", "S", "E", "E"], None);

    assert_eq!(result.resolution.scheme, SchemeId::Ubse);
    let plausibility: Vec<_> = result
        .resolution
        .warnings
        .iter()
        .filter(|w| w.kind == DiagnosticKind::Plausibility)
        .collect();
    assert_eq!(plausibility.len(), 1);
    assert_eq!(plausibility[0].severity, Severity::Info);
    assert_eq!(plausibility[0].suggested_scheme, Some(SchemeId::Use));
    assert!(plausibility[0].message.contains("Borderline"));
    assert_eq!(result.chart.categories.len(), 4);
}

#[test]
fn test_force_use_narrows_to_three_levels() {
    let result = plot(&["U", "S", "S", "S", "E", "E"], Some("USE"));

    assert_eq!(result.resolution.scheme, SchemeId::Use);
    assert_eq!(result.resolution.force_scheme, Some(ForceScheme::Use));
    assert_eq!(
        result.chart.categories,
        vec!["Unsatisfactory", "Satisfactory", "Excellent"]
    );
    assert_eq!(result.chart.values, vec![1.0, 3.0, 2.0]);
    assert!(result.resolution.warnings.is_empty());
}

#[test]
fn test_force_hint_is_case_insensitive() {
    let result = plot(&["U", "S", "S", "S", "E", "E"], Some("use"));
    assert_eq!(result.resolution.scheme, SchemeId::Use);
}

#[test]
fn test_pure_correct_is_ambiguous_until_forced() {
    let ambiguous = plot(&["C", "C", "C"], None);
    assert_eq!(ambiguous.resolution.scheme, SchemeId::Unknown);
    assert!(ambiguous.resolution.has_warning(DiagnosticKind::AmbiguousScheme));
    assert!(
        ambiguous.resolution.warnings[0]
            .message
            .contains("could not determine scheme")
    );
    assert_eq!(ambiguous.chart.categories, vec!["C"]);

    let cidk = plot(&["C", "C", "C"], Some("CIDK"));
    assert_eq!(cidk.resolution.scheme, SchemeId::Cidk);
    assert_eq!(cidk.chart.categories, vec!["Correct", "Incorrect", "Don't Know"]);
    assert_eq!(cidk.chart.values, vec![3.0, 0.0, 0.0]);
    assert_eq!(cidk.chart.x_axis_label, "Response");

    let cninc = plot(&["C", "C", "C"], Some("CNINC"));
    assert_eq!(cninc.resolution.scheme, SchemeId::Cninc);
    assert_eq!(
        cninc.chart.categories,
        vec!["Competent", "Needs Improvement", "Not Competent"]
    );
    assert_eq!(cninc.chart.x_axis_label, "Grade");
}

#[test]
fn test_disambiguating_symbols_need_no_force() {
    let result = plot(&["C", "C", "I", "DK"], None);
    assert_eq!(result.resolution.scheme, SchemeId::Cidk);
    assert!(result.resolution.warnings.is_empty());

    let result = plot(&["C", "NI", "NC", "C"], None);
    assert_eq!(result.resolution.scheme, SchemeId::Cninc);
}

#[test]
fn test_force_is_deterministic() {
    let first = plot(&["C", "C", "C"], Some("CNINC"));
    let second = plot(&["C", "C", "C"], Some("CNINC"));
    assert_eq!(first.resolution.normalized, second.resolution.normalized);
    assert_eq!(first.chart, second.chart);
}

#[test]
fn test_wrong_family_force_keeps_estimate() {
    let result = plot(&["C", "I", "DK"], Some("PF"));
    assert_eq!(result.resolution.scheme, SchemeId::Cidk);
    assert!(result.resolution.has_warning(DiagnosticKind::ForceNotApplied));
}

#[test]
fn test_force_picks_scheme_when_no_candidate_qualifies() {
    let cidk = plot(&["C", "C", "I", "NC"], Some("CIDK"));
    assert_eq!(cidk.resolution.scheme, SchemeId::Cidk);
    assert!(!cidk.resolution.has_warning(DiagnosticKind::AmbiguousScheme));
    assert_eq!(cidk.summary.charted_observations, 4);

    let cninc = plot(&["C", "C", "I", "NC"], Some("CNINC"));
    assert_eq!(cninc.resolution.scheme, SchemeId::Cninc);
    assert!(!cninc.resolution.has_warning(DiagnosticKind::AmbiguousScheme));
    assert_eq!(
        cninc.resolution.normalized,
        vec!["Competent", "Competent", OUT_OF_SCHEME_LEVEL, "Not Competent"]
    );
}

#[test]
fn test_force_overrides_tie_between_other_schemes() {
    let result = plot(&["E", "E"], Some("CIDK"));
    assert_eq!(
        result.resolution.estimate,
        Estimate::Ambiguous(vec![SchemeId::Ubse, SchemeId::Pfe])
    );
    assert_eq!(result.resolution.scheme, SchemeId::Cidk);
    assert!(!result.resolution.has_warning(DiagnosticKind::AmbiguousScheme));
    assert!(result.resolution.has_warning(DiagnosticKind::OutOfScheme));
    assert_eq!(result.chart.categories.last().map(String::as_str), Some(OUT_OF_SCHEME_LEVEL));
}

#[test]
fn test_cidk_force_against_other_single_scheme_is_silent() {
    let result = plot(&["U", "B", "S", "E"], Some("CIDK"));
    assert_eq!(result.resolution.scheme, SchemeId::Ubse);
    assert!(result.resolution.warnings.is_empty());
}

#[test]
fn test_unrecognised_force_has_no_effect() {
    let forced = plot(&["U", "B", "S", "E"], Some("UBSE"));
    let plain = plot(&["U", "B", "S", "E"], None);
    assert_eq!(forced.resolution.force_scheme, None);
    assert_eq!(forced.chart, plain.chart);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_normalization_is_a_fixed_point() {
    let catalog = Catalog::global();
    for scheme in catalog.schemes() {
        let force = scheme.name().parse::<ForceScheme>().ok();
        let force_text = force.map(|f| f.to_string());
        let levels = catalog.levels_of(scheme);

        let first = plot(levels, force_text.as_deref());
        assert_eq!(first.resolution.scheme, scheme, "levels of {}", scheme);
        assert_eq!(first.resolution.normalized, levels, "{}", scheme);

        let normalized: Vec<&str> = first.resolution.normalized.iter().map(String::as_str).collect();
        let second = plot(&normalized, force_text.as_deref());
        assert_eq!(second.resolution.normalized, first.resolution.normalized);
    }
}

#[test]
fn test_renormalizing_messy_input_is_stable() {
    let first = plot(&["p", "PASS", "f", "Distinction"], None);
    assert_eq!(first.resolution.scheme, SchemeId::Pfe);

    let normalized: Vec<&str> = first.resolution.normalized.iter().map(String::as_str).collect();
    let second = plot(&normalized, None);
    assert_eq!(second.resolution.normalized, first.resolution.normalized);
    assert_eq!(second.resolution.scheme, SchemeId::Pfe);
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_frequency_sums_to_input_length() {
    let labels = ["Female", "Male", "Male", "Other", "Prefer not to say", "Female"];
    let result = plot(&labels, None);

    assert_eq!(result.resolution.scheme, SchemeId::Gender);
    let sum: f64 = result.chart.values.iter().sum();
    assert_eq!(sum as usize, labels.len());
    assert_eq!(result.summary.charted_observations, labels.len());
    // Non-binary is kept as a zero-count level.
    assert_eq!(result.chart.categories.len(), 5);
}

#[test]
fn test_percentage_sums_to_hundred() {
    let input = LabelInput::flat(["U", "B", "S", "S", "E", "E", "E"]);
    let result = resolve(&input, Some("Perc"), None).unwrap();

    assert_eq!(result.chart.y_axis_label, "Percentage");
    let sum: f64 = result.chart.values.iter().sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
}

#[test]
fn test_out_of_scheme_values_are_charted_as_na() {
    let mut labels = vec!["S"; 20];
    labels.push("P");
    let result = plot(&labels, None);

    assert_eq!(result.resolution.scheme, SchemeId::Ubse);
    assert!(result.resolution.has_warning(DiagnosticKind::OutOfScheme));
    assert_eq!(result.summary.total_observations, 21);
    assert_eq!(result.summary.charted_observations, 21);
    assert_eq!(result.chart.categories.last().map(String::as_str), Some(OUT_OF_SCHEME_LEVEL));
    assert_eq!(result.chart.values.last(), Some(&1.0));
    assert_eq!(result.chart.colors.len(), result.chart.categories.len());
}

#[test]
fn test_fixed_colors_per_category() {
    let result = plot(&["U", "B", "S", "E"], None);
    let catalog = Catalog::global();
    assert_eq!(result.chart.colors, catalog.colors_of(SchemeId::Ubse));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_missing_both_arguments_names_both() {
    let err = validation_error(resolve(&LabelInput::Absent, None, None));
    assert_eq!(err.arguments(), &[Argument::Values, Argument::ChartType]);
    assert!(err.to_string().contains("values"));
    assert!(err.to_string().contains("chart_type"));
}

#[test]
fn test_missing_one_argument_names_only_that_one() {
    let err = validation_error(resolve(&LabelInput::Absent, Some("frequency"), None));
    assert_eq!(
        err,
        ValidationError::MissingInput {
            arguments: vec![Argument::Values]
        }
    );

    let input = LabelInput::flat(["U", "S"]);
    let err = validation_error(resolve(&input, None, None));
    assert_eq!(
        err,
        ValidationError::MissingInput {
            arguments: vec![Argument::ChartType]
        }
    );
    assert!(!err.to_string().contains("values"));
}

#[test]
fn test_table_input_is_wrong_format() {
    let input = LabelInput::from_json(r#"{"q1": ["U", "S"], "q2": ["B", "E"]}"#).unwrap();
    let err = validation_error(resolve(&input, Some("frequency"), None));
    assert_eq!(
        err,
        ValidationError::WrongFormat {
            arguments: vec![Argument::Values]
        }
    );

    let input = LabelInput::from_json(r#"[["U", "S"], ["B", "E"]]"#).unwrap();
    assert!(matches!(
        validation_error(resolve(&input, Some("frequency"), None)),
        ValidationError::WrongFormat { .. }
    ));
}

#[test]
fn test_unrecognised_chart_type_is_wrong_format() {
    let input = LabelInput::flat(["U", "S"]);
    let err = validation_error(resolve(&input, Some("histogram"), None));
    assert_eq!(err.arguments(), &[Argument::ChartType]);
}

#[test]
fn test_json_flat_input() {
    let input = LabelInput::from_json(r#"["U", "B", "S", "E"]"#).unwrap();
    let result = resolve(&input, Some("f"), None).unwrap();
    assert_eq!(result.resolution.scheme, SchemeId::Ubse);
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(matches!(
        LabelInput::from_json("[\"U\", "),
        Err(GradeplotError::Json(_))
    ));
}

// =============================================================================
// Configuration and rendering
// =============================================================================

#[test]
fn test_coverage_threshold_is_configurable() {
    let labels = ["S", "S", "S", "P"];

    let strict = plot(&labels, None);
    assert_eq!(strict.resolution.scheme, SchemeId::Unknown);

    let lenient = GradePlot::with_config(GradePlotConfig {
        resolver: ResolverConfig {
            coverage_threshold: 70.0,
        },
    })
    .plot(&LabelInput::flat(labels), Some("frequency"), None)
    .unwrap();
    assert_eq!(lenient.resolution.scheme, SchemeId::Ubse);
}

#[test]
fn test_resolver_and_facade_agree() {
    let labels = ["DK", "C", "I", "I"];
    let direct = SchemeResolver::new().resolve_labels(&labels, None);
    let facade = plot(&labels, None);
    assert_eq!(direct.normalized, facade.resolution.normalized);
    assert_eq!(direct.scheme, facade.resolution.scheme);
}

/// Captures what the chart hands to its renderer.
struct RecordingRenderer;

impl ChartRenderer for RecordingRenderer {
    type Artifact = (Vec<String>, Vec<f64>, Vec<Color>, String, String);

    fn render_bar_chart(
        &self,
        categories: &[String],
        values: &[f64],
        colors: &[Color],
        y_axis_label: &str,
        x_axis_label: &str,
    ) -> Self::Artifact {
        (
            categories.to_vec(),
            values.to_vec(),
            colors.to_vec(),
            y_axis_label.to_string(),
            x_axis_label.to_string(),
        )
    }
}

#[test]
fn test_renderer_receives_parallel_sequences() {
    let result = plot(&["Correct", "DK", "c"], None);
    let (categories, values, colors, y_label, x_label) = result.chart.render(&RecordingRenderer);

    assert_eq!(categories, vec!["Correct", "Incorrect", "Don't Know"]);
    assert_eq!(values, vec![2.0, 0.0, 1.0]);
    assert_eq!(colors.len(), categories.len());
    assert_eq!(y_label, "Frequency");
    assert_eq!(x_label, "Response");
}

#[test]
fn test_svg_renderer_draws_every_level() {
    let result = plot(&["U", "S", "S", "E"], None);
    let svg = result.chart.render(&SvgRenderer::new());
    assert_eq!(svg.matches("<rect").count(), 4);
    assert!(svg.contains("Borderline"));
}

#[test]
fn test_result_serializes_to_json() {
    let result = plot(&["U", "S", "S", "E"], Some("USE"));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["resolution"]["scheme"], "USE");
    assert_eq!(json["resolution"]["force_scheme"], "USE");
    assert_eq!(json["chart"]["chart_type"], "frequency");
    assert_eq!(json["chart"]["colors"][0], "#D7191C");
    assert_eq!(json["summary"]["total_observations"], 4);
}
