//! Applying raw measurements to engine inputs.
//!
//! Raw entries are text as typed by the reader. They are parsed, averaged,
//! rounded by the guideline's rule and bucketed, then written into a copy
//! of the caller's input. Any failure is returned instead of a partially
//! populated input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nodule_model::{
    FleischnerInput, FleischnerSize, FleischnerSolidComponent, LungRadsInput, LungRadsSize,
    LungRadsSolidComponent,
};

use crate::error::MeasurementError;
use crate::normalization::{
    GrowthAssessment, axis_mean, classify_growth, is_blank, parse_exam_date, parse_measurement,
    round_fleischner, round_lung_rads, volume_to_diameter,
};

/// A size as entered: one mean diameter, or a long and short axis pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeEntry {
    Single(String),
    Axes { long: String, short: String },
}

impl SizeEntry {
    pub fn single(value: impl Into<String>) -> Self {
        SizeEntry::Single(value.into())
    }

    pub fn axes(long: impl Into<String>, short: impl Into<String>) -> Self {
        SizeEntry::Axes {
            long: long.into(),
            short: short.into(),
        }
    }

    /// True when nothing was entered.
    pub fn is_blank(&self) -> bool {
        match self {
            SizeEntry::Single(value) => is_blank(value),
            SizeEntry::Axes { long, short } => is_blank(long) && is_blank(short),
        }
    }

    /// Parsed values without any positivity requirement.
    fn parse(&self, field: &'static str) -> Result<Vec<f64>, MeasurementError> {
        let parse_one = |text: &str| {
            parse_measurement(text)
                .ok_or_else(|| MeasurementError::insufficient(field, format!("'{text}' is not a number")))
        };
        match self {
            SizeEntry::Single(value) => Ok(vec![parse_one(value)?]),
            SizeEntry::Axes { long, short } => Ok(vec![parse_one(long)?, parse_one(short)?]),
        }
    }

    /// Unrounded mean without a positivity check.
    fn raw_mean(&self, field: &'static str) -> Result<f64, MeasurementError> {
        let values = self.parse(field)?;
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Unrounded mean diameter. Every value must be greater than zero.
    pub fn mean_mm(&self, field: &'static str) -> Result<f64, MeasurementError> {
        let values = self.parse(field)?;
        let mean = match values.as_slice() {
            [single] if *single > 0.0 => Some(*single),
            [long, short] => axis_mean(*long, *short),
            _ => None,
        };
        mean.ok_or_else(|| MeasurementError::insufficient(field, "enter a size greater than zero"))
    }

    /// Mean of a solid component. Zero means no solid component.
    fn component_mm(&self, field: &'static str) -> Result<Option<f64>, MeasurementError> {
        let values = self.parse(field)?;
        if values.iter().any(|v| *v < 0.0) {
            return Err(MeasurementError::insufficient(field, "size cannot be negative"));
        }
        if values.iter().all(|v| *v == 0.0) {
            return Ok(None);
        }
        self.mean_mm(field).map(Some)
    }
}

fn present(entry: &Option<SizeEntry>) -> Option<&SizeEntry> {
    entry.as_ref().filter(|e| !e.is_blank())
}

fn present_text(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !is_blank(t))
}

/// Raw Fleischner measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleischnerMeasurements {
    pub size: SizeEntry,
    #[serde(default)]
    pub solid_component: Option<SizeEntry>,
}

/// Fleischner input with measured buckets applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasuredFleischner {
    pub input: FleischnerInput,
    /// Mean diameter rounded to the nearest millimetre.
    pub size_mm: f64,
    pub solid_component_mm: Option<f64>,
}

/// Set the Fleischner size and solid component buckets from measurements.
///
/// # Errors
///
/// Returns [`MeasurementError::InsufficientData`] when the size is missing,
/// not a number or not positive, or when the solid component is not a number.
pub fn apply_fleischner(
    input: &FleischnerInput,
    measurements: &FleischnerMeasurements,
) -> Result<MeasuredFleischner, MeasurementError> {
    if measurements.size.is_blank() {
        return Err(MeasurementError::insufficient("size", "no size entered"));
    }
    let size_mm = round_fleischner(measurements.size.mean_mm("size")?);

    let solid_component_mm = match present(&measurements.solid_component) {
        Some(entry) => entry
            .component_mm("solid component")?
            .map(round_fleischner)
            .filter(|mm| *mm > 0.0),
        None => None,
    };

    let mut updated = *input;
    updated.size_category = FleischnerSize::from_mm(size_mm);
    updated.solid_component =
        FleischnerSolidComponent::from_mm(solid_component_mm.unwrap_or(0.0));
    debug!(
        size_mm,
        ?solid_component_mm,
        size = %updated.size_category,
        solid = %updated.solid_component,
        "applied Fleischner measurements"
    );

    Ok(MeasuredFleischner {
        input: updated,
        size_mm,
        solid_component_mm,
    })
}

/// Prior exam used for interval growth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEntry {
    pub prior_size: SizeEntry,
    pub prior_date: String,
    pub current_date: String,
}

/// Raw Lung-RADS measurements. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungRadsMeasurements {
    pub size: Option<SizeEntry>,
    pub solid_component: Option<SizeEntry>,
    pub volume_mm3: Option<String>,
    /// Use the volume-derived diameter as the size.
    pub use_volume: bool,
    pub growth: Option<GrowthEntry>,
}

/// Lung-RADS input with measurements applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredLungRads {
    pub input: LungRadsInput,
    /// Size driving the bucket: the volume-derived diameter or the mean diameter.
    pub effective_size_mm: Option<f64>,
    pub growth: Option<GrowthAssessment>,
    /// Notes for the reader, such as the manual review of long intervals.
    pub notes: Vec<String>,
}

/// Write precise Lung-RADS sizes, buckets and growth status into the input.
///
/// Blank or missing entries keep the input's own precise fields, which still
/// drive the size bucket and the current size for growth.
///
/// # Errors
///
/// - [`MeasurementError::InsufficientData`] for unparseable or non-positive
///   entries, a volume requested without a volume value, or growth requested
///   without a current size.
/// - [`MeasurementError::Growth`] when the growth interval or sizes are invalid.
pub fn apply_lung_rads(
    input: &LungRadsInput,
    measurements: &LungRadsMeasurements,
) -> Result<MeasuredLungRads, MeasurementError> {
    let mut updated = *input;
    let mut notes = Vec::new();

    let size_mm = present(&measurements.size)
        .map(|entry| entry.mean_mm("size").map(round_lung_rads))
        .transpose()?;

    let volume_mm3 = present_text(&measurements.volume_mm3)
        .map(|text| {
            parse_measurement(text).filter(|v| *v > 0.0).ok_or_else(|| {
                MeasurementError::insufficient("volume", "enter a volume greater than zero")
            })
        })
        .transpose()?;

    if size_mm.is_some() {
        updated.size_mm = size_mm;
    }
    if volume_mm3.is_some() {
        updated.volume_mm3 = volume_mm3;
    }
    updated.use_volume |= measurements.use_volume;
    if measurements.use_volume && !updated.volume_mm3.is_some_and(|v| v > 0.0) {
        return Err(MeasurementError::insufficient(
            "volume",
            "volume is selected but no volume was entered",
        ));
    }

    // Precise values already on the input count the same as entered ones.
    let effective_size_mm = updated
        .use_volume
        .then_some(updated.volume_mm3)
        .flatten()
        .and_then(volume_to_diameter)
        .or_else(|| updated.size_mm.filter(|mm| *mm > 0.0).map(round_lung_rads));
    if let Some(mm) = effective_size_mm {
        updated.size_category = LungRadsSize::from_mm(mm);
    }

    if let Some(entry) = present(&measurements.solid_component) {
        let solid_mm = entry
            .component_mm("solid component")?
            .map(round_lung_rads)
            .filter(|mm| *mm > 0.0);
        updated.solid_component_mm = solid_mm;
        updated.solid_component = LungRadsSolidComponent::from_mm(solid_mm.unwrap_or(0.0));
    }

    let growth = match &measurements.growth {
        Some(entry) => {
            let current_mm = effective_size_mm.ok_or_else(|| {
                MeasurementError::insufficient("size", "a current size is required for growth")
            })?;
            let prior_mm = round_lung_rads(entry.prior_size.raw_mean("prior size")?);
            let prior_date = parse_exam_date(&entry.prior_date).ok_or_else(|| {
                MeasurementError::insufficient("prior date", format!("'{}' is not a date", entry.prior_date))
            })?;
            let current_date = parse_exam_date(&entry.current_date).ok_or_else(|| {
                MeasurementError::insufficient(
                    "current date",
                    format!("'{}' is not a date", entry.current_date),
                )
            })?;

            let assessment = classify_growth(prior_mm, current_mm, prior_date, current_date)?;
            match assessment.nodule_status() {
                Some(status) => updated.nodule_status = status,
                None => notes.extend(assessment.review_note()),
            }
            Some(assessment)
        }
        None => None,
    };

    debug!(
        ?size_mm,
        ?volume_mm3,
        ?effective_size_mm,
        size = %updated.size_category,
        solid = %updated.solid_component,
        status = %updated.nodule_status,
        "applied Lung-RADS measurements"
    );

    Ok(MeasuredLungRads {
        input: updated,
        effective_size_mm,
        growth,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodule_model::{NoduleStatus, NoduleType};

    #[test]
    fn fleischner_axes_round_to_whole_mm() {
        let measurements = FleischnerMeasurements {
            size: SizeEntry::axes("10", "7"),
            solid_component: None,
        };
        let measured = apply_fleischner(&FleischnerInput::default(), &measurements).unwrap();
        assert_eq!(measured.size_mm, 9.0);
        assert_eq!(measured.input.size_category, FleischnerSize::GreaterThanEight);
    }

    #[test]
    fn fleischner_zero_solid_component_is_none() {
        let input = FleischnerInput {
            nodule_type: NoduleType::PartSolid,
            ..FleischnerInput::default()
        };
        let measurements = FleischnerMeasurements {
            size: SizeEntry::single("7"),
            solid_component: Some(SizeEntry::single("0")),
        };
        let measured = apply_fleischner(&input, &measurements).unwrap();
        assert_eq!(measured.solid_component_mm, None);
        assert_eq!(measured.input.solid_component, FleischnerSolidComponent::None);
        assert_eq!(measured.input.nodule_type, NoduleType::PartSolid);
    }

    #[test]
    fn lung_rads_growth_sets_status() {
        let measurements = LungRadsMeasurements {
            size: Some(SizeEntry::single("7.2")),
            growth: Some(GrowthEntry {
                prior_size: SizeEntry::single("5.4"),
                prior_date: "2024-01-01".into(),
                current_date: "2024-07-19".into(),
            }),
            ..LungRadsMeasurements::default()
        };
        let measured = apply_lung_rads(&LungRadsInput::default(), &measurements).unwrap();
        assert_eq!(measured.input.nodule_status, NoduleStatus::Growing);
        assert_eq!(measured.input.size_mm, Some(7.2));
        assert_eq!(measured.input.size_category, LungRadsSize::SixToEight);
        assert!(measured.notes.is_empty());
    }
}
