//! Volume to equivalent diameter conversion.
//!
//! A nodule volume is converted to the diameter of a sphere of equal
//! volume, `d = 2 * (3V / 4π)^(1/3)`, then rounded to 0.1 mm as Lung-RADS
//! requires. The result replaces a manually entered mean diameter.

use std::f64::consts::PI;

use super::rounding::round_lung_rads;

/// Equivalent spherical diameter in mm, unrounded.
pub fn equivalent_diameter(volume_mm3: f64) -> Option<f64> {
    if volume_mm3 > 0.0 && volume_mm3.is_finite() {
        Some(2.0 * (3.0 * volume_mm3 / (4.0 * PI)).cbrt())
    } else {
        None
    }
}

/// Equivalent spherical diameter rounded to 0.1 mm.
pub fn volume_to_diameter(volume_mm3: f64) -> Option<f64> {
    equivalent_diameter(volume_mm3).map(round_lung_rads)
}
