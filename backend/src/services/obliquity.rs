//! Mean obliquity of the ecliptic.

/// Mean obliquity ε in degrees for a given T in Julian centuries from J2000.0.
///
/// ε = (84381.448 − 46.8150·T − 0.00059·T² + 0.001813·T³) / 3600
///
/// Valid near J2000 ± a few centuries. Total function: always returns a value.
pub fn mean_obliquity(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    let epsilon_arcseconds = 84381.448 - 46.8150 * t - 0.00059 * t2 + 0.001813 * t3;

    epsilon_arcseconds / 3600.0
}
