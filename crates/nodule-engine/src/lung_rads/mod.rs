//! ACR Lung-RADS v2022 categories.
//!
//! Evaluation order:
//!
//! 1. Exam-level and benign findings (categories 0, 1 and resolved nodules)
//! 2. Nodule-type sub-routine on the effective measurements
//! 3. 4X upgrade for sub-routine results with suspicious features
//! 4. Multiplicity and S modifier notes, always applied
//!
//! # Reference
//!
//! - American College of Radiology. Lung-RADS v2022 Assessment Categories.

mod airway;
mod atypical_cyst;
mod ground_glass;
mod measurements;
mod part_solid;
mod perifissural;
mod postprocess;
mod solid;

use tracing::debug;

use nodule_model::{
    CtStatus, LungRadsCategory, LungRadsInput, LungRadsNoduleType, LungRadsResult, NoduleStatus,
};

use measurements::Measurements;

pub use postprocess::{MULTIPLE_NODULES_NOTE, S_MODIFIER_NOTE};

pub(crate) const ANNUAL_SCREENING: &str = "Continue annual screening with LDCT in 12 months.";
pub(crate) const SIX_MONTH_LDCT: &str = "6-month LDCT.";
pub(crate) const TISSUE_WORKUP: &str =
    "Chest CT with or without contrast, PET/CT and/or tissue sampling.";

/// Lung-RADS category and management for a screening nodule.
pub fn calculate_lung_rads(input: &LungRadsInput) -> LungRadsResult {
    let result = match exam_level(input) {
        Some(result) => result,
        None => {
            let m = Measurements::resolve(input);
            debug!(
                nodule_type = %input.nodule_type,
                size_mm = m.size_mm,
                size = %m.size,
                precise = m.is_precise,
                solid_mm = m.solid_mm,
                "effective measurements"
            );
            let result = by_nodule_type(input, &m);
            postprocess::upgrade_to_4x(result, input)
        }
    };

    let result = postprocess::annotate(result, input);
    debug!(
        category = %result.category,
        base = ?result.base_category,
        reclassified = result.is_reclassified,
        "Lung-RADS category"
    );
    result
}

/// Findings that decide the category before the nodule itself is graded.
fn exam_level(input: &LungRadsInput) -> Option<LungRadsResult> {
    let result = if input.ct_status == CtStatus::Incomplete {
        LungRadsResult::new(
            LungRadsCategory::Cat0,
            "Additional imaging or comparison required. Prior chest CT needed for comparison OR \
             recall for complete exam.",
        )
        .with_notes(
            "Category 0 assigned when exam is technically inadequate or prior CT needed for \
             comparison.",
        )
    } else if input.ct_status == CtStatus::AwaitingComparison {
        LungRadsResult::new(
            LungRadsCategory::Cat0,
            "Comparison CT required. Obtain prior exam for comparison before final \
             categorization.",
        )
        .with_notes("Category 0 pending prior CT review.")
    } else if input.has_inflammatory_findings {
        LungRadsResult::new(
            LungRadsCategory::Cat0,
            "Short-term follow-up LDCT in 1-3 months to confirm resolution.",
        )
        .with_notes(
            "Findings suggest infection or inflammation. Short-term follow-up recommended.",
        )
    } else if input.has_benign_calcification {
        LungRadsResult::new(LungRadsCategory::Cat1, ANNUAL_SCREENING).with_notes(
            "Benign calcification pattern (complete, central, popcorn, or concentric rings) \
             indicates benign nodule.",
        )
    } else if input.has_macroscopic_fat {
        LungRadsResult::new(LungRadsCategory::Cat1, ANNUAL_SCREENING)
            .with_notes("Macroscopic fat within nodule indicates hamartoma (benign).")
    } else if input.nodule_status == NoduleStatus::Resolved {
        LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING)
            .with_notes("Resolution of previously seen nodule indicates benign etiology.")
    } else {
        return None;
    };
    Some(result)
}

fn by_nodule_type(input: &LungRadsInput, m: &Measurements) -> LungRadsResult {
    match input.nodule_type {
        LungRadsNoduleType::Solid => solid::assess(input, m),
        LungRadsNoduleType::PartSolid => part_solid::assess(input, m),
        LungRadsNoduleType::GroundGlass => ground_glass::assess(input, m),
        LungRadsNoduleType::Perifissural | LungRadsNoduleType::Juxtapleural => {
            perifissural::assess(input, m)
        }
        LungRadsNoduleType::Airway => airway::assess(input, m),
        LungRadsNoduleType::AtypicalCyst => atypical_cyst::assess(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_beats_every_finding() {
        let input = LungRadsInput {
            ct_status: CtStatus::Incomplete,
            has_benign_calcification: true,
            has_inflammatory_findings: true,
            has_additional_suspicious_features: true,
            ..LungRadsInput::default()
        };
        let result = calculate_lung_rads(&input);
        assert_eq!(result.category, LungRadsCategory::Cat0);
        assert_eq!(result.base_category, None);
    }

    #[test]
    fn exam_level_results_still_get_notes() {
        let input = LungRadsInput {
            has_macroscopic_fat: true,
            is_multiple: true,
            has_s_modifier_findings: true,
            ..LungRadsInput::default()
        };
        let result = calculate_lung_rads(&input);
        assert_eq!(result.category, LungRadsCategory::Cat1);
        assert!(result.has_s_modifier);
        let notes = result.additional_notes.unwrap_or_default();
        assert!(notes.contains(MULTIPLE_NODULES_NOTE));
        assert!(notes.contains(S_MODIFIER_NOTE));
        assert!(notes.starts_with("Macroscopic fat"));
    }
}
