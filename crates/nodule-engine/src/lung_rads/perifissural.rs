//! Perifissural and juxtapleural nodules.
//!
//! Below 10 mm these are managed as intrapulmonary lymph nodes. Larger or
//! atypical nodules are managed as solid nodules.

use nodule_model::{LungRadsCategory, LungRadsInput, LungRadsNoduleType, LungRadsResult};

use super::measurements::Measurements;
use super::{ANNUAL_SCREENING, solid};

pub(crate) const UNCONFIRMED_MORPHOLOGY_NOTE: &str = "Benign juxtapleural morphology \
    (smooth margins, triangular, lentiform or ovoid shape) not confirmed. Correlate before \
    applying benign criteria.";

pub(crate) fn assess(input: &LungRadsInput, m: &Measurements) -> LungRadsResult {
    let result = if m.is_below_ten_mm() {
        let notes = match input.nodule_type {
            LungRadsNoduleType::Juxtapleural => {
                "Juxtapleural nodule < 10mm. Likely intrapulmonary lymph node."
            }
            _ => "Perifissural nodule < 10mm with benign morphology. Likely intrapulmonary lymph node.",
        };
        LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING).with_notes(notes)
    } else {
        solid::assess(input, m)
    };

    if input.nodule_type == LungRadsNoduleType::Juxtapleural
        && !input.has_benign_juxtapleural_morphology
    {
        result.with_appended_note(UNCONFIRMED_MORPHOLOGY_NOTE)
    } else {
        result
    }
}
