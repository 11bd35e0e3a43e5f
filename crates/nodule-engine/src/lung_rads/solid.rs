//! Solid nodules.

use nodule_model::{LungRadsCategory, LungRadsInput, LungRadsResult, NoduleStatus};

use super::measurements::Measurements;
use super::{ANNUAL_SCREENING, SIX_MONTH_LDCT, TISSUE_WORKUP};

pub(crate) fn assess(input: &LungRadsInput, m: &Measurements) -> LungRadsResult {
    if input.is_baseline() {
        baseline(m.size_mm)
    } else {
        follow_up(input, m.size_mm)
    }
}

fn baseline(size: f64) -> LungRadsResult {
    if size < 6.0 {
        LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING)
            .with_notes("Solid nodule < 6mm at baseline. Very low malignancy probability.")
    } else if size < 8.0 {
        LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT)
            .with_notes("Solid nodule 6-7.9mm at baseline. Short-term follow-up recommended.")
    } else if size < 15.0 {
        LungRadsResult::new(
            LungRadsCategory::Cat4A,
            "3-month LDCT; PET/CT may be used when solid component is ≥ 8mm.",
        )
        .with_notes(
            "Solid nodule 8-14.9mm at baseline. Suspicious. Consider PET/CT if ≥ 8mm solid component.",
        )
    } else {
        LungRadsResult::new(
            LungRadsCategory::Cat4B,
            "Chest CT with or without contrast, PET/CT and/or tissue sampling depending on \
             probability of malignancy and comorbidities.",
        )
        .with_notes("Solid nodule ≥ 15mm at baseline. Very suspicious. Further workup warranted.")
    }
}

fn follow_up(input: &LungRadsInput, size: f64) -> LungRadsResult {
    // Checked before `is_stable`, which also covers slow growth.
    if input.nodule_status == NoduleStatus::SlowGrowing {
        return LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP).with_notes(
            "Slow-growing solid nodule on follow-up. Suspicious despite sub-threshold growth.",
        );
    }

    if input.is_new() {
        return if size < 4.0 {
            LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING)
                .with_notes("New solid nodule < 4mm. Continue routine screening.")
        } else if size < 6.0 {
            LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT)
                .with_notes("New solid nodule 4-5.9mm. Short-term follow-up to assess stability.")
        } else if size < 8.0 {
            LungRadsResult::new(LungRadsCategory::Cat4A, "3-month LDCT; PET/CT may be used.")
                .with_notes("New solid nodule 6-7.9mm. Suspicious. Short-term follow-up or PET/CT.")
        } else {
            LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP)
                .with_notes("New solid nodule ≥ 8mm. Very suspicious. Further workup warranted.")
        };
    }

    if input.is_growing() {
        return if size < 8.0 {
            LungRadsResult::new(
                LungRadsCategory::Cat4A,
                "3-month LDCT; PET/CT may be used if ≥ 8mm.",
            )
            .with_notes(
                "Growing solid nodule < 8mm. Growth defined as > 1.5mm increase within 12 months. Suspicious.",
            )
        } else {
            LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP)
                .with_notes("Growing solid nodule ≥ 8mm. Very suspicious. Further workup warranted.")
        };
    }

    // Stepped management: stable at 6 months steps 3 down to 2, stable at
    // 3 months steps 4A down to 3.
    if input.is_stable() {
        if (6.0..8.0).contains(&size) {
            return LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING)
                .with_notes("Category 3 → 2: Solid nodule 6-7.9mm stable on follow-up.")
                .reclassified_from(LungRadsCategory::Cat3);
        }
        if (8.0..15.0).contains(&size) {
            return LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT)
                .with_notes(
                    "Category 4A → 3: Solid nodule 8-14.9mm stable at 3-month follow-up. \
                     Continue 6-month surveillance.",
                )
                .reclassified_from(LungRadsCategory::Cat4A);
        }
    }

    baseline(size)
}
