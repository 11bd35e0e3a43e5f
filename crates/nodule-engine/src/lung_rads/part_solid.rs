//! Part-solid nodules, graded by total size and solid component.

use nodule_model::{
    LungRadsCategory, LungRadsInput, LungRadsResult, LungRadsSolidComponent, NoduleStatus,
};

use super::measurements::Measurements;
use super::{ANNUAL_SCREENING, SIX_MONTH_LDCT, TISSUE_WORKUP};

pub(crate) fn assess(input: &LungRadsInput, m: &Measurements) -> LungRadsResult {
    let total = m.size_mm;
    let solid = m.solid_mm;

    if m.solid == LungRadsSolidComponent::None && !input.is_baseline() {
        return LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING)
            .with_notes("Solid component resolved. Now pure GGO. Benign behavior.");
    }

    if input.is_new() {
        return if total < 6.0 {
            LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT).with_notes(
                "New part-solid nodule < 6mm total. Short-term follow-up recommended.",
            )
        } else if solid < 4.0 {
            LungRadsResult::new(LungRadsCategory::Cat4A, "3-month LDCT.")
                .with_notes("New part-solid nodule with solid component < 4mm. Suspicious.")
        } else {
            LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP)
                .with_notes("New part-solid nodule with solid component ≥ 4mm. Very suspicious.")
        };
    }

    if !input.is_baseline() && input.nodule_status == NoduleStatus::SlowGrowing {
        return LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP).with_notes(
            "Slow-growing part-solid nodule on follow-up. Suspicious despite sub-threshold growth.",
        );
    }

    if total < 6.0 {
        return LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING)
            .with_notes("Part-solid nodule < 6mm total size. Very low malignancy probability.");
    }

    if solid < 6.0 {
        LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT).with_notes(
            "Part-solid nodule ≥ 6mm with solid component < 6mm. Short-term follow-up.",
        )
    } else if solid < 8.0 {
        let notes = if input.is_growing() {
            "Growing part-solid with solid component 6-7.9mm. Suspicious."
        } else {
            "Part-solid nodule with solid component 6-7.9mm. Suspicious."
        };
        LungRadsResult::new(LungRadsCategory::Cat4A, "3-month LDCT; PET/CT may be used.")
            .with_notes(notes)
    } else {
        LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP)
            .with_notes("Part-solid nodule with solid component ≥ 8mm. Very suspicious.")
    }
}
