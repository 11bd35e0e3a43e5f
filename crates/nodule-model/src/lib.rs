//! Data model for pulmonary nodule management.
//!
//! - **fleischner**: Fleischner Society 2017 inputs and recommendations
//! - **lung_rads**: ACR Lung-RADS v2022 inputs and results
//! - **category**: the Lung-RADS category scale

pub mod category;
pub mod error;
pub mod fleischner;
pub mod lung_rads;

pub use category::{CategoryInfo, LungRadsCategory};
pub use error::{NoduleError, Result};
pub use fleischner::{
    FLEISCHNER_REFERENCE, FleischnerInput, FleischnerRecommendation, FleischnerSize,
    FleischnerSolidComponent, NoduleType, PatientRisk,
};
pub use lung_rads::{
    AirwayLocation, CtStatus, LungRadsInput, LungRadsNoduleType, LungRadsResult, LungRadsSize,
    LungRadsSolidComponent, NoduleStatus,
};

/// Normalize a label for lookup: uppercase, without whitespace, `_` or `-`.
pub(crate) fn normalize_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}
