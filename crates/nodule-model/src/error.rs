use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoduleError {
    #[error("unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

impl NoduleError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        NoduleError::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoduleError>;
