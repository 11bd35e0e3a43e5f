use thiserror::Error;

/// Failure to derive a growth classification from two measurements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrowthError {
    #[error("enter a valid date interval: current exam must be after the prior exam")]
    InvalidInterval,
    #[error("{which} size must be greater than zero")]
    InvalidSize { which: &'static str },
}

/// Failure to turn raw measurements into engine inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    #[error("insufficient data for {field}: {reason}")]
    InsufficientData { field: &'static str, reason: String },
    #[error(transparent)]
    Growth(#[from] GrowthError),
}

impl MeasurementError {
    pub(crate) fn insufficient(field: &'static str, reason: impl Into<String>) -> Self {
        MeasurementError::InsufficientData {
            field,
            reason: reason.into(),
        }
    }
}
