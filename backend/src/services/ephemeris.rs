//! Simplified planetary ephemerides.
//!
//! Ecliptic longitudes from truncated mean-element series: the Sun carries a
//! three-term equation of center, the Moon the ten dominant ELP2000 periodic
//! terms, the planets a single first-order eccentricity correction, and Pluto
//! its mean longitude only. This is "observational accuracy", deliberately far
//! from full perturbation theory.
//!
//! Every function here is pure in T: the same T always yields bit-identical
//! output, which the reproducibility tests rely on.

use crate::models::{Body, BodyPosition};
use crate::services::astro_math::normalize_360;

/// Radians-to-degrees factor used by the first-order planet correction.
const DEGREES_PER_RADIAN: f64 = 57.2958;

/// Mean longitude polynomial plus the orbit eccentricity for the single-term
/// planet approximation.
struct PlanetElements {
    body: Body,
    /// Mean longitude at epoch, degrees.
    l0: f64,
    /// Mean motion, degrees per Julian century.
    rate: f64,
    eccentricity: f64,
}

const PLANETS: [PlanetElements; 7] = [
    PlanetElements { body: Body::Mercury, l0: 252.250906, rate: 149472.6746358, eccentricity: 0.205635 },
    PlanetElements { body: Body::Venus, l0: 181.979801, rate: 58517.8156760, eccentricity: 0.006772 },
    PlanetElements { body: Body::Mars, l0: 355.433000, rate: 19140.2993039, eccentricity: 0.093405 },
    PlanetElements { body: Body::Jupiter, l0: 34.351519, rate: 3034.9056606, eccentricity: 0.048498 },
    PlanetElements { body: Body::Saturn, l0: 50.077444, rate: 1222.1138488, eccentricity: 0.055546 },
    PlanetElements { body: Body::Uranus, l0: 314.055005, rate: 428.4669983, eccentricity: 0.046381 },
    PlanetElements { body: Body::Neptune, l0: 304.348665, rate: 218.4862002, eccentricity: 0.009456 },
];

/// Ecliptic longitudes of all ten bodies at T Julian centuries from J2000.0,
/// in canonical order (Sun and Moon first).
pub fn body_longitudes(t: f64) -> Vec<BodyPosition> {
    let mut positions = Vec::with_capacity(Body::ALL.len());
    positions.push(BodyPosition { body: Body::Sun, longitude: sun_longitude(t) });
    positions.push(BodyPosition { body: Body::Moon, longitude: moon_longitude(t) });
    for planet in &PLANETS {
        positions.push(BodyPosition {
            body: planet.body,
            longitude: planet_longitude(planet, t),
        });
    }
    positions.push(BodyPosition { body: Body::Pluto, longitude: pluto_longitude(t) });
    positions
}

/// Sun's ecliptic longitude: mean longitude plus a three-term equation of
/// center in the mean anomaly.
pub fn sun_longitude(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;

    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m.to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    normalize_360(l0 + c)
}

/// Moon's ecliptic longitude: mean longitude plus the ten dominant periodic
/// terms in elongation D, solar anomaly M, lunar anomaly M', and argument of
/// latitude F.
pub fn moon_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude
    let l = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;

    // Mean elongation
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;

    // Sun's mean anomaly
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;

    // Moon's mean anomaly
    let m_prime = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14712000.0;

    // Argument of latitude
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;

    let d_rad = d.to_radians();
    let m_rad = m.to_radians();
    let mp_rad = m_prime.to_radians();
    let f_rad = f.to_radians();

    let mut correction = 0.0;
    correction += 6.288774 * mp_rad.sin();
    correction += 1.274027 * (2.0 * d_rad - mp_rad).sin();
    correction += 0.658314 * (2.0 * d_rad).sin();
    correction += 0.213618 * (2.0 * mp_rad).sin();
    correction -= 0.185116 * m_rad.sin();
    correction -= 0.114332 * (2.0 * f_rad).sin();
    correction += 0.058793 * (2.0 * d_rad - 2.0 * mp_rad).sin();
    correction += 0.057066 * (2.0 * d_rad - m_rad - mp_rad).sin();
    correction += 0.053322 * (2.0 * d_rad + mp_rad).sin();
    correction += 0.045758 * (2.0 * d_rad - m_rad).sin();

    normalize_360(l + correction)
}

/// Planet longitude: mean longitude plus a rough `e·sin(L)` equation of
/// center scaled to degrees.
fn planet_longitude(elements: &PlanetElements, t: f64) -> f64 {
    let l = elements.l0 + elements.rate * t;
    let correction = elements.eccentricity * l.to_radians().sin() * DEGREES_PER_RADIAN;
    normalize_360(l + correction)
}

/// Pluto: mean longitude only, no correction term.
fn pluto_longitude(t: f64) -> f64 {
    normalize_360(238.92881 + 145.18042 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ten_bodies_in_order() {
        let positions = body_longitudes(0.0);
        let bodies: Vec<Body> = positions.iter().map(|p| p.body).collect();
        assert_eq!(bodies, Body::ALL.to_vec());
    }

    #[test]
    fn test_all_longitudes_normalized() {
        for t in [-1.5, -0.0366, 0.0, 0.2045, 1.0] {
            for position in body_longitudes(t) {
                assert!(
                    (0.0..360.0).contains(&position.longitude),
                    "{:?} longitude {} out of range at T={t}",
                    position.body,
                    position.longitude
                );
            }
        }
    }

    #[test]
    fn test_sun_at_j2000() {
        // The Sun sits in late Capricorn at the J2000 epoch (~280°).
        let lon = sun_longitude(0.0);
        assert!((279.0..282.0).contains(&lon), "Sun at J2000 was {lon}");
    }

    #[test]
    fn test_sun_near_equinox() {
        // 2000-03-20 00:00 UTC = JD 2451623.5
        let t = (2451623.5 - 2451545.0) / 36525.0;
        let lon = sun_longitude(t);
        // Within a degree or two of the 0° Aries point
        assert!(lon > 357.0 || lon < 3.0, "Sun near equinox was {lon}");
    }

    #[test]
    fn test_moon_moves_fast() {
        // Roughly 13°/day
        let day = 1.0 / 36525.0;
        let delta = crate::services::astro_math::minimal_angle_difference(
            moon_longitude(0.0),
            moon_longitude(day),
        );
        assert!((11.0..16.0).contains(&delta), "daily Moon motion was {delta}");
    }

    #[test]
    fn test_deterministic_for_equal_t() {
        let t = 0.123456789;
        let first = body_longitudes(t);
        let second = body_longitudes(t);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.longitude.to_bits(), b.longitude.to_bits());
        }
    }

    #[test]
    fn test_pluto_has_no_correction() {
        let t = 0.5;
        let expected = normalize_360(238.92881 + 145.18042 * t);
        assert_eq!(pluto_longitude(t), expected);
    }
}
