//! Measurement normalization primitives.
//!
//! - `numeric`: free-text millimetre parsing
//! - `rounding`: guideline rounding and axis averaging
//! - `volume`: volume to equivalent diameter
//! - `growth`: interval growth classification
//! - `date`: exam date parsing

pub mod date;
pub mod growth;
pub mod numeric;
pub mod rounding;
pub mod volume;

pub use date::parse_exam_date;
pub use growth::{
    DAYS_PER_MONTH, GROWTH_THRESHOLD_MM, GROWTH_WINDOW_DAYS, GrowthAssessment,
    GrowthClassification, classify_growth, interval_days,
};
pub use numeric::{is_blank, parse_measurement};
pub use rounding::{axis_mean, round_fleischner, round_half_away, round_lung_rads};
pub use volume::{equivalent_diameter, volume_to_diameter};
