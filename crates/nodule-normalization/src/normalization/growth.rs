//! Interval growth classification.
//!
//! Lung-RADS defines growth as an increase in mean diameter of more than
//! 1.5 mm within 12 months. Outside that window the measurement pair
//! cannot set the nodule status on its own and needs manual review.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nodule_model::NoduleStatus;

use super::rounding::round_lung_rads;
use crate::error::GrowthError;

/// Increase in mean diameter that must be exceeded to count as growth.
pub const GROWTH_THRESHOLD_MM: f64 = 1.5;

/// Longest interval over which growth may be declared automatically.
pub const GROWTH_WINDOW_DAYS: i64 = 365;

/// Average month length used to express intervals in months.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Outcome of comparing two measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthClassification {
    Growing,
    Stable,
    /// Interval longer than 12 months; status must be set by the reader.
    ManualReview,
}

/// Growth between a prior and a current measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssessment {
    pub classification: GrowthClassification,
    /// Current minus prior size, rounded to 0.1 mm.
    pub delta_mm: f64,
    pub days: i64,
    pub months: f64,
}

impl GrowthAssessment {
    /// Nodule status to apply, or None when manual review is needed.
    pub fn nodule_status(&self) -> Option<NoduleStatus> {
        match self.classification {
            GrowthClassification::Growing => Some(NoduleStatus::Growing),
            GrowthClassification::Stable => Some(NoduleStatus::Stable),
            GrowthClassification::ManualReview => None,
        }
    }

    pub fn is_within_window(&self) -> bool {
        self.days <= GROWTH_WINDOW_DAYS
    }

    /// One-line summary, e.g. `+1.8 mm over 6.6 months: growing`.
    pub fn summary(&self) -> String {
        let outcome = match self.classification {
            GrowthClassification::Growing => "growing",
            GrowthClassification::Stable => "stable",
            GrowthClassification::ManualReview => "manual review",
        };
        format!(
            "{:+.1} mm over {:.1} months: {outcome}",
            self.delta_mm, self.months
        )
    }

    /// Note surfaced to the reader when the status was not set automatically.
    pub fn review_note(&self) -> Option<String> {
        (self.classification == GrowthClassification::ManualReview).then(|| {
            format!(
                "Interval of {:.1} months exceeds 12 months; growth criteria apply within 12 months. \
                 Review nodule status manually.",
                self.months
            )
        })
    }
}

/// Number of whole days from `prior` to `current`.
pub fn interval_days(prior: NaiveDate, current: NaiveDate) -> i64 {
    (current - prior).num_days()
}

/// Classify interval growth from two sizes and two exam dates.
///
/// Sizes are expected already rounded with [`round_lung_rads`]. The
/// difference is rounded to 0.1 mm again before it is compared with
/// [`GROWTH_THRESHOLD_MM`], so raw sizes 1.54 mm apart count as stable.
///
/// # Errors
///
/// - [`GrowthError::InvalidInterval`] when `current_date` is not after `prior_date`.
/// - [`GrowthError::InvalidSize`] when either size is not positive.
pub fn classify_growth(
    prior_mm: f64,
    current_mm: f64,
    prior_date: NaiveDate,
    current_date: NaiveDate,
) -> Result<GrowthAssessment, GrowthError> {
    if !(prior_mm > 0.0) {
        return Err(GrowthError::InvalidSize { which: "prior" });
    }
    if !(current_mm > 0.0) {
        return Err(GrowthError::InvalidSize { which: "current" });
    }
    let days = interval_days(prior_date, current_date);
    if days <= 0 {
        return Err(GrowthError::InvalidInterval);
    }

    let delta_mm = round_lung_rads(current_mm - prior_mm);
    let months = days as f64 / DAYS_PER_MONTH;
    let classification = if days > GROWTH_WINDOW_DAYS {
        warn!(days, "growth interval exceeds 12 months; status needs manual review");
        GrowthClassification::ManualReview
    } else if delta_mm > GROWTH_THRESHOLD_MM {
        GrowthClassification::Growing
    } else {
        GrowthClassification::Stable
    };

    debug!(prior_mm, current_mm, delta_mm, days, ?classification, "classified growth");
    Ok(GrowthAssessment {
        classification,
        delta_mm,
        days,
        months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(days_after_epoch: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(days_after_epoch)
    }

    #[test]
    fn growth_above_threshold_within_window() {
        let result = classify_growth(5.4, 7.2, date(0), date(200)).unwrap();
        assert_eq!(result.classification, GrowthClassification::Growing);
        assert_eq!(result.delta_mm, 1.8);
        assert_eq!(result.nodule_status(), Some(NoduleStatus::Growing));
        assert!((result.months - 200.0 / 30.44).abs() < 1e-9);
    }

    #[test]
    fn small_increase_is_stable() {
        let result = classify_growth(5.2, 6.0, date(0), date(180)).unwrap();
        assert_eq!(result.classification, GrowthClassification::Stable);
        assert_eq!(result.delta_mm, 0.8);
        assert_eq!(result.nodule_status(), Some(NoduleStatus::Stable));
    }

    #[test]
    fn exactly_threshold_is_not_growth() {
        let result = classify_growth(6.0, 7.5, date(0), date(200)).unwrap();
        assert_eq!(result.classification, GrowthClassification::Stable);
        let result = classify_growth(5.1, 6.6, date(0), date(200)).unwrap();
        assert_eq!(result.classification, GrowthClassification::Stable);
    }

    #[test]
    fn window_boundary() {
        let result = classify_growth(5.0, 8.0, date(0), date(365)).unwrap();
        assert_eq!(result.classification, GrowthClassification::Growing);
        let result = classify_growth(5.0, 8.0, date(0), date(366)).unwrap();
        assert_eq!(result.classification, GrowthClassification::ManualReview);
        assert_eq!(result.nodule_status(), None);
        assert!(result.review_note().unwrap().contains("manually"));
    }

    #[test]
    fn invalid_interval() {
        assert_eq!(
            classify_growth(5.0, 6.0, date(10), date(10)),
            Err(GrowthError::InvalidInterval)
        );
        assert_eq!(
            classify_growth(5.0, 6.0, date(10), date(5)),
            Err(GrowthError::InvalidInterval)
        );
    }

    #[test]
    fn invalid_sizes() {
        assert_eq!(
            classify_growth(0.0, 6.0, date(0), date(5)),
            Err(GrowthError::InvalidSize { which: "prior" })
        );
        assert_eq!(
            classify_growth(5.0, f64::NAN, date(0), date(5)),
            Err(GrowthError::InvalidSize { which: "current" })
        );
    }

    #[test]
    fn summary_formats_signed_delta() {
        let result = classify_growth(5.4, 7.2, date(0), date(200)).unwrap();
        assert_eq!(result.summary(), "+1.8 mm over 6.6 months: growing");
        let result = classify_growth(7.2, 6.0, date(0), date(100)).unwrap();
        assert!(result.summary().starts_with("-1.2 mm"));
    }
}
