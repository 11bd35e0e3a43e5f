//! Tests for case file parsing and evaluation.

use std::fs;

use nodule_cli::case::{
    FleischnerCase, LungRadsCase, evaluate_fleischner, evaluate_lung_rads, load_case, parse_case,
};
use nodule_model::{
    FleischnerSize, FleischnerSolidComponent, LungRadsCategory, LungRadsSize, NoduleStatus,
};
use nodule_normalization::{GrowthClassification, MeasurementError};

const GROWING_SOLID: &str = r#"{
    "input": { "nodule_type": "solid", "ct_status": "follow_up" },
    "measurements": {
        "size": { "long": "8.4", "short": "6.2" },
        "growth": {
            "prior_size": "5.4",
            "prior_date": "2024-01-01",
            "current_date": "2024-07-19"
        }
    }
}"#;

#[test]
fn growing_solid_case() {
    let case: LungRadsCase = parse_case(GROWING_SOLID).unwrap();
    let report = evaluate_lung_rads(&case).unwrap();

    assert_eq!(report.effective_size_mm, Some(7.3));
    assert_eq!(report.input.size_category, LungRadsSize::SixToEight);
    assert_eq!(report.input.nodule_status, NoduleStatus::Growing);
    let growth = report.growth.unwrap();
    assert_eq!(growth.classification, GrowthClassification::Growing);
    assert_eq!(growth.delta_mm, 1.9);
    assert_eq!(growth.days, 200);
    assert!(report.notes.is_empty());

    insta::assert_json_snapshot!(report.result, @r###"
    {
      "category": "4A",
      "base_category": null,
      "management": "3-month LDCT; PET/CT may be used if ≥ 8mm.",
      "probability_of_malignancy": "5-15%",
      "additional_notes": "Growing solid nodule < 8mm. Growth defined as > 1.5mm increase within 12 months. Suspicious.",
      "is_reclassified": false,
      "has_s_modifier": false
    }
    "###);
}

#[test]
fn long_interval_keeps_status_and_reports_note() {
    let text = r#"{
        "input": { "ct_status": "follow_up", "nodule_status": "stable" },
        "measurements": {
            "size": "9",
            "growth": { "prior_size": "5", "prior_date": "2022-01-01", "current_date": "2024-01-01" }
        }
    }"#;
    let case: LungRadsCase = parse_case(text).unwrap();
    let report = evaluate_lung_rads(&case).unwrap();
    assert_eq!(report.input.nodule_status, NoduleStatus::Stable);
    assert_eq!(report.notes.len(), 1);
    assert!(report.notes[0].contains("manually"));
    // Stable 8-14.9 mm on follow-up steps down from 4A.
    assert_eq!(report.result.category, LungRadsCategory::Cat3);
}

#[test]
fn volume_case_uses_equivalent_diameter() {
    let text = r#"{ "measurements": { "size": "5", "volume_mm3": "268", "use_volume": true } }"#;
    let case: LungRadsCase = parse_case(text).unwrap();
    let report = evaluate_lung_rads(&case).unwrap();
    assert_eq!(report.effective_size_mm, Some(8.0));
    assert_eq!(report.input.size_mm, Some(5.0));
    assert_eq!(report.result.category, LungRadsCategory::Cat4A);
}

#[test]
fn precise_input_fields_survive_without_measurements() {
    let case: LungRadsCase = parse_case(r#"{ "input": { "size_mm": 9.0 } }"#).unwrap();
    let report = evaluate_lung_rads(&case).unwrap();
    assert_eq!(report.input.size_mm, Some(9.0));
    assert_eq!(report.result.category, LungRadsCategory::Cat4A);

    let text = r#"{ "input": { "volume_mm3": 268.0, "use_volume": true } }"#;
    let case: LungRadsCase = parse_case(text).unwrap();
    let report = evaluate_lung_rads(&case).unwrap();
    assert_eq!(report.input.volume_mm3, Some(268.0));
    assert!(report.input.use_volume);
    assert_eq!(report.effective_size_mm, Some(8.0));
    assert_eq!(report.result.category, LungRadsCategory::Cat4A);
}

#[test]
fn part_solid_fleischner_case() {
    let text = r#"{
        "input": { "nodule_type": "part_solid", "risk": "high" },
        "measurements": { "size": { "long": "12", "short": "9" }, "solid_component": "6.5" }
    }"#;
    let case: FleischnerCase = parse_case(text).unwrap();
    let report = evaluate_fleischner(&case).unwrap();
    assert_eq!(report.size_mm, Some(11.0));
    assert_eq!(report.solid_component_mm, Some(7.0));
    assert_eq!(report.input.size_category, FleischnerSize::GreaterThanEight);
    assert_eq!(
        report.input.solid_component,
        FleischnerSolidComponent::SixOrMore
    );
    assert!(
        report
            .recommendation
            .recommendation
            .contains("consider PET/CT or tissue sampling")
    );
}

#[test]
fn measurement_errors_are_returned() {
    let text = r#"{ "measurements": { "size": "abc" } }"#;
    let case: FleischnerCase = parse_case(text).unwrap();
    let error = evaluate_fleischner(&case).unwrap_err();
    assert!(matches!(
        error,
        MeasurementError::InsufficientData { field: "size", .. }
    ));

    let text = r#"{ "measurements": { "use_volume": true } }"#;
    let case: LungRadsCase = parse_case(text).unwrap();
    assert!(evaluate_lung_rads(&case).is_err());
}

#[test]
fn malformed_cases_are_rejected() {
    assert!(parse_case::<LungRadsCase>("{").is_err());
    assert!(parse_case::<LungRadsCase>(r#"{ "input": { "nodule_type": "round" } }"#).is_err());
    assert!(parse_case::<FleischnerCase>(r#"{ "input": { "risk": "medium" } }"#).is_err());
}

#[test]
fn load_case_reads_file_and_names_it_on_error() {
    let dir = std::env::temp_dir().join(format!("nodule-cli-case-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join("growing.json");
    fs::write(&path, GROWING_SOLID).unwrap();
    let case: LungRadsCase = load_case(&path).unwrap();
    assert!(case.measurements.size.is_some_and(|size| !size.is_blank()));

    let missing = dir.join("missing.json");
    let error = load_case::<LungRadsCase>(&missing).unwrap_err();
    assert!(format!("{error:#}").contains("missing.json"));

    fs::remove_dir_all(&dir).unwrap();
}
