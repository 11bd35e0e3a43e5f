//! Case files and their evaluation.
//!
//! A case file is a JSON object with an `input` record and optional raw
//! `measurements`:
//!
//! ```json
//! {
//!   "input": { "nodule_type": "part_solid", "ct_status": "follow_up" },
//!   "measurements": { "size": { "long": "9.1", "short": "7.4" } }
//! }
//! ```
//!
//! Measurements are applied by the normalizer before the engine runs, so the
//! categorical fields of `input` only need to be set when no measurement
//! covers them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use nodule_engine::{calculate_fleischner, calculate_lung_rads};
use nodule_model::{FleischnerInput, FleischnerRecommendation, LungRadsInput, LungRadsResult};
use nodule_normalization::{
    FleischnerMeasurements, GrowthAssessment, LungRadsMeasurements, MeasurementError,
    apply_fleischner, apply_lung_rads,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleischnerCase {
    pub input: FleischnerInput,
    pub measurements: Option<FleischnerMeasurements>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungRadsCase {
    pub input: LungRadsInput,
    pub measurements: LungRadsMeasurements,
}

/// Evaluated Fleischner case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleischnerReport {
    /// Input as passed to the engine, after measurements were applied.
    pub input: FleischnerInput,
    pub size_mm: Option<f64>,
    pub solid_component_mm: Option<f64>,
    pub recommendation: FleischnerRecommendation,
}

/// Evaluated Lung-RADS case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LungRadsReport {
    pub input: LungRadsInput,
    pub effective_size_mm: Option<f64>,
    pub growth: Option<GrowthAssessment>,
    /// Normalizer notes, such as a growth interval that needs manual review.
    pub notes: Vec<String>,
    pub result: LungRadsResult,
}

/// Read and parse a case file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a valid case.
pub fn load_case<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read case file {}", path.display()))?;
    parse_case(&text).with_context(|| format!("parse case file {}", path.display()))
}

/// Parse a case from JSON text.
///
/// # Errors
///
/// Returns the JSON error for malformed text or unknown enum values.
pub fn parse_case<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text)
}

/// Apply measurements, then run the Fleischner engine.
///
/// # Errors
///
/// Returns the normalizer's error when the measurements are unusable.
pub fn evaluate_fleischner(case: &FleischnerCase) -> Result<FleischnerReport, MeasurementError> {
    let span = info_span!("fleischner");
    let _guard = span.enter();

    let (input, size_mm, solid_component_mm) = match &case.measurements {
        Some(measurements) => {
            let measured = apply_fleischner(&case.input, measurements)?;
            (
                measured.input,
                Some(measured.size_mm),
                measured.solid_component_mm,
            )
        }
        None => (case.input, None, None),
    };
    debug!(?size_mm, ?solid_component_mm, "evaluating Fleischner case");

    Ok(FleischnerReport {
        recommendation: calculate_fleischner(&input),
        input,
        size_mm,
        solid_component_mm,
    })
}

/// Apply measurements, then run the Lung-RADS engine.
///
/// # Errors
///
/// Returns the normalizer's error when the measurements are unusable.
pub fn evaluate_lung_rads(case: &LungRadsCase) -> Result<LungRadsReport, MeasurementError> {
    let span = info_span!("lung_rads");
    let _guard = span.enter();

    let measured = apply_lung_rads(&case.input, &case.measurements)?;
    debug!(
        effective_size_mm = ?measured.effective_size_mm,
        notes = measured.notes.len(),
        "evaluating Lung-RADS case"
    );

    Ok(LungRadsReport {
        result: calculate_lung_rads(&measured.input),
        input: measured.input,
        effective_size_mm: measured.effective_size_mm,
        growth: measured.growth,
        notes: measured.notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodule_model::{FleischnerSize, LungRadsCategory};

    #[test]
    fn empty_object_is_default_case() {
        let case: LungRadsCase = parse_case("{}").unwrap();
        assert_eq!(case, LungRadsCase::default());
        let case: FleischnerCase = parse_case("{}").unwrap();
        assert_eq!(case.measurements, None);
    }

    #[test]
    fn fleischner_without_measurements_uses_input() {
        let case = FleischnerCase {
            input: FleischnerInput {
                size_category: FleischnerSize::GreaterThanEight,
                ..FleischnerInput::default()
            },
            measurements: None,
        };
        let report = evaluate_fleischner(&case).unwrap();
        assert_eq!(report.size_mm, None);
        assert_eq!(report.input, case.input);
        assert!(report.recommendation.recommendation.starts_with("Consider CT at 3 months"));
    }

    #[test]
    fn lung_rads_default_case_is_category_two() {
        let report = evaluate_lung_rads(&LungRadsCase::default()).unwrap();
        assert_eq!(report.result.category, LungRadsCategory::Cat2);
        assert!(report.notes.is_empty());
    }
}
