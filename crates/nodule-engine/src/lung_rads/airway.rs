//! Endobronchial and airway nodules.

use tracing::debug;

use nodule_model::{
    AirwayLocation, LungRadsCategory, LungRadsInput, LungRadsResult, NoduleStatus,
};

use super::ANNUAL_SCREENING;
use super::measurements::Measurements;

pub(crate) const ATELECTASIS_NOTE: &str =
    "Associated atelectasis present. Evaluate for airway obstruction.";

/// Explicit location when given, otherwise size of at least 4 mm stands in
/// for a segmental or more proximal airway.
pub(crate) fn resolve_location(input: &LungRadsInput, m: &Measurements) -> AirwayLocation {
    input.airway_location.unwrap_or(if m.size_mm >= 4.0 {
        AirwayLocation::SegmentalOrProximal
    } else {
        AirwayLocation::Subsegmental
    })
}

pub(crate) fn assess(input: &LungRadsInput, m: &Measurements) -> LungRadsResult {
    let location = resolve_location(input, m);
    debug!(%location, explicit = input.airway_location.is_some(), "airway location");

    let result = match location {
        AirwayLocation::SegmentalOrProximal => {
            let persistent = !input.is_baseline()
                && (input.is_stable()
                    || input.is_growing()
                    || input.nodule_status == NoduleStatus::Baseline);
            if persistent {
                LungRadsResult::new(
                    LungRadsCategory::Cat4B,
                    "Chest CT with or without contrast, PET/CT and/or tissue sampling. \
                     Consider bronchoscopy.",
                )
                .with_notes(
                    "Persistent endobronchial/airway nodule at follow-up. High suspicion. \
                     Bronchoscopy indicated.",
                )
            } else {
                LungRadsResult::new(LungRadsCategory::Cat4A, "3-month LDCT. Consider bronchoscopy.")
                    .with_notes(
                        "Endobronchial/airway nodule (segmental or more proximal). Short-term \
                         follow-up to assess persistence.",
                    )
            }
        }
        AirwayLocation::Subsegmental => {
            LungRadsResult::new(LungRadsCategory::Cat2, ANNUAL_SCREENING).with_notes(
                "Subsegmental airway nodule. May represent mucus or secretion. Continue routine \
                 screening.",
            )
        }
    };

    if input.has_atelectasis {
        result.with_appended_note(ATELECTASIS_NOTE)
    } else {
        result
    }
}
