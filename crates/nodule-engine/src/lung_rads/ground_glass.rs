//! Non-solid (pure ground-glass) nodules.

use nodule_model::{LungRadsCategory, LungRadsInput, LungRadsResult};

use super::measurements::Measurements;
use super::{ANNUAL_SCREENING, SIX_MONTH_LDCT};

pub(crate) fn assess(input: &LungRadsInput, m: &Measurements) -> LungRadsResult {
    if m.size_mm < 30.0 {
        let notes = if input.is_new() {
            "New non-solid (GGO) nodule < 30mm. Pure GGOs are typically slow-growing and indolent."
        } else {
            "Non-solid (GGO) nodule < 30mm. Continue routine annual screening."
        };
        return LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING).with_notes(notes);
    }

    if input.is_baseline() || input.is_new() {
        LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT).with_notes(
            "Non-solid (GGO) nodule ≥ 30mm. Large GGO warrants short-term follow-up. \
             May represent AIS or MIA.",
        )
    } else if input.is_stable() {
        LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING).with_notes(
            "Large GGO (≥ 30mm) with stable or slow growth. Pure GGOs are typically indolent \
             even when large.",
        )
    } else {
        LungRadsResult::new(LungRadsCategory::Cat3, SIX_MONTH_LDCT)
            .with_notes("Non-solid (GGO) nodule ≥ 30mm. Short-term follow-up recommended.")
    }
}
