//! Zodiac sign and house assignment for any ecliptic longitude.

use crate::models::{HouseCusps, ZodiacSign};
use crate::services::astro_math::normalize_360;

/// Zodiac sign holding the given longitude.
pub fn sign_of(longitude: f64) -> ZodiacSign {
    ZodiacSign::ALL[sign_index(longitude)]
}

/// Sign index 0-11 where 0 = Aries.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize_360(longitude) / 30.0).floor() as usize) % 12
}

/// Degree within the sign, [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_360(longitude) % 30.0
}

/// House number (1-12) for a longitude given the cusps, by the forward-arc
/// test: a body sits in house n when its longitude falls between cusp n and
/// cusp n+1 moving forward through the zodiac, with cusp 12 wrapping to
/// cusp 1.
///
/// Well-formed cusps partition the circle, so exactly one house matches;
/// should none match, house 1 is the fallback.
pub fn house_of(longitude: f64, cusps: &HouseCusps) -> u8 {
    let lon = normalize_360(longitude);

    for house in 1..=12usize {
        let start = normalize_360(cusps.cusp(house));
        let end = normalize_360(cusps.cusp(house % 12 + 1));

        if in_forward_arc(lon, start, end) {
            return house as u8;
        }
    }

    1
}

/// Whole-Sign house assignment: one sign per house counted from the
/// Ascendant's sign. This bypasses the cusp-arc test, which would only
/// reproduce the same answer with sign-boundary cusps.
pub fn whole_sign_house(body_longitude: f64, ascendant: f64) -> u8 {
    let body_sign = sign_index(body_longitude) as i32;
    let asc_sign = sign_index(ascendant) as i32;
    (((body_sign - asc_sign + 12) % 12) + 1) as u8
}

fn in_forward_arc(lon: f64, start: f64, end: f64) -> bool {
    if start <= end {
        lon >= start && lon < end
    } else {
        // Arc wraps through 0° Aries
        lon >= start || lon < end
    }
}
