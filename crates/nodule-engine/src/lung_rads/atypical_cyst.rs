//! Atypical pulmonary cysts (thick-walled, multilocular or with nodularity).

use nodule_model::{LungRadsCategory, LungRadsInput, LungRadsResult};

use super::TISSUE_WORKUP;

pub(crate) fn assess(input: &LungRadsInput) -> LungRadsResult {
    if input.is_growing() {
        LungRadsResult::new(LungRadsCategory::Cat4B, TISSUE_WORKUP).with_notes(
            "Atypical pulmonary cyst with growing wall thickness or nodularity. Suspicious for \
             cystic lung cancer.",
        )
    } else if input.is_baseline() || input.is_new() {
        LungRadsResult::new(LungRadsCategory::Cat4A, "3-month LDCT.").with_notes(
            "Atypical pulmonary cyst (thick-walled or multilocular). Short-term follow-up to \
             assess evolution.",
        )
    } else {
        LungRadsResult::new(LungRadsCategory::Cat4A, "3-month LDCT.")
            .with_notes("Atypical pulmonary cyst. Continue monitoring for evolution.")
    }
}
