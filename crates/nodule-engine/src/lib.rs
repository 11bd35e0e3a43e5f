//! Pulmonary nodule decision engines.
//!
//! Both engines are pure functions from an input record to a freshly built
//! result record. Every combination of enum inputs has a defined outcome.
//!
//! - **fleischner**: Fleischner Society 2017 incidental nodule management
//! - **lung_rads**: ACR Lung-RADS v2022 screening categories

pub mod fleischner;
pub mod lung_rads;

pub use fleischner::calculate_fleischner;
pub use lung_rads::{MULTIPLE_NODULES_NOTE, S_MODIFIER_NOTE, calculate_lung_rads};
