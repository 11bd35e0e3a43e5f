//! Measurement normalization for pulmonary nodule guidelines.
//!
//! Turns free-text sizes, volumes and exam dates into the rounded values
//! and buckets the guideline engines consume.
//!
//! - **normalization**: parsing, rounding, volume conversion, growth
//! - **measurement**: applying raw measurements to engine inputs

pub mod error;
pub mod measurement;
pub mod normalization;

pub use error::{GrowthError, MeasurementError};
pub use measurement::{
    FleischnerMeasurements, GrowthEntry, LungRadsMeasurements, MeasuredFleischner,
    MeasuredLungRads, SizeEntry, apply_fleischner, apply_lung_rads,
};
pub use normalization::{
    GrowthAssessment, GrowthClassification, axis_mean, classify_growth, parse_exam_date,
    parse_measurement, round_fleischner, round_lung_rads, volume_to_diameter,
};
