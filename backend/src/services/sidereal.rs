//! Greenwich and Local Mean Sidereal Time.

use crate::services::astro_math::normalize_360;

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// GMST_seconds = 67310.54841 + (876600·3600 + 8640184.812866)·T
///              + 0.093104·T² − 6.2e−6·T³
/// GMST_degrees = GMST_seconds / 240
pub fn gmst(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    let gmst_seconds =
        67310.54841 + (876600.0 * 3600.0 + 8640184.812866) * t + 0.093104 * t2 - 6.2e-6 * t3;

    // 240 seconds of time = 1 degree
    normalize_360(gmst_seconds / 240.0)
}

/// Local Mean Sidereal Time: GMST plus the east-positive geographic longitude.
pub fn lst(gmst_degrees: f64, longitude_degrees: f64) -> f64 {
    normalize_360(gmst_degrees + longitude_degrees)
}
