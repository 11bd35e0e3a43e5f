//! Guideline-mandated rounding and axis averaging.
//!
//! - Fleischner 2017: average of long and short axis, rounded to the
//!   nearest whole millimetre.
//! - Lung-RADS v2022: mean diameter rounded to the nearest 0.1 mm.
//!
//! Ties round away from zero in both systems (8.5 -> 9, 5.95 -> 6.0).

/// Round to `decimals` places, ties away from zero.
///
/// Binary floating point stores values such as 1.15 slightly below the
/// decimal tie, so the scaled value is nudged by a few ULPs before rounding.
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let nudge = scaled.abs() * f64::EPSILON * 4.0;
    (scaled + scaled.signum() * nudge).round() / factor
}

/// Fleischner rounding: nearest whole millimetre.
pub fn round_fleischner(mm: f64) -> f64 {
    round_half_away(mm, 0)
}

/// Lung-RADS rounding: nearest 0.1 mm.
pub fn round_lung_rads(mm: f64) -> f64 {
    round_half_away(mm, 1)
}

/// Mean of the long and short axis. Both must be greater than zero.
///
/// The result is unrounded; apply [`round_fleischner`] or
/// [`round_lung_rads`] depending on the guideline.
pub fn axis_mean(long_axis: f64, short_axis: f64) -> Option<f64> {
    if long_axis > 0.0 && short_axis > 0.0 {
        Some((long_axis + short_axis) / 2.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleischner_ties_round_up() {
        assert_eq!(round_fleischner(8.5), 9.0);
        assert_eq!(round_fleischner(5.5), 6.0);
        assert_eq!(round_fleischner(8.4), 8.0);
        assert_eq!(round_fleischner(4.9), 5.0);
    }

    #[test]
    fn lung_rads_one_decimal() {
        assert_eq!(round_lung_rads(5.96), 6.0);
        assert_eq!(round_lung_rads(7.94), 7.9);
        assert_eq!(round_lung_rads(7.95), 8.0);
        assert_eq!(round_lung_rads(1.15), 1.2);
    }

    #[test]
    fn negative_ties_round_away_from_zero() {
        assert_eq!(round_fleischner(-2.5), -3.0);
        assert_eq!(round_lung_rads(-0.25), -0.3);
    }

    #[test]
    fn axis_mean_requires_both_axes() {
        assert_eq!(axis_mean(10.0, 7.0), Some(8.5));
        assert_eq!(axis_mean(0.0, 7.0), None);
        assert_eq!(axis_mean(10.0, -1.0), None);
    }
}
