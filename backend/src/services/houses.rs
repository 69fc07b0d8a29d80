//! House cusp computation with automatic Placidus degradation.
//!
//! The solver never fails: a numerically degenerate Placidus computation is
//! resolved by a warning-flagged fallback to Equal houses, so callers always
//! receive exactly 12 cusps. A non-empty warning list means "degraded but
//! valid", not an error.

use log::warn;

use crate::models::{CalculationWarning, ChartAngles, HouseCusps, HouseSystem};
use crate::services::astro_math::{atan2_degrees, normalize_360};
use crate::services::obliquity::mean_obliquity;
use crate::services::sidereal::{gmst, lst};

/// Placidus is numerically unstable towards the poles, where some diurnal and
/// nocturnal semi-arcs vanish. At or beyond this latitude the solver switches
/// to Equal houses outright.
pub const PLACIDUS_MAX_LATITUDE_DEG: f64 = 66.0;

/// Result of a house computation: the cusps, the system that actually
/// produced them, and the fallback warning if one fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseOutcome {
    pub cusps: HouseCusps,
    pub effective_system: HouseSystem,
    pub warning: Option<CalculationWarning>,
}

/// Compute the 12 house cusps for the requested system.
///
/// Equal and Whole Sign are total. Placidus may substitute Equal houses, in
/// which case the outcome carries the warning and reports `Equal` as the
/// effective system.
pub fn compute_houses(
    system: HouseSystem,
    t: f64,
    latitude: f64,
    longitude: f64,
    angles: &ChartAngles,
) -> HouseOutcome {
    match system {
        HouseSystem::WholeSign => HouseOutcome {
            cusps: HouseCusps::new(whole_sign_cusps(angles.ascendant)),
            effective_system: HouseSystem::WholeSign,
            warning: None,
        },
        HouseSystem::Equal => HouseOutcome {
            cusps: HouseCusps::new(equal_cusps(angles.ascendant)),
            effective_system: HouseSystem::Equal,
            warning: None,
        },
        HouseSystem::Placidus => compute_placidus(t, latitude, longitude, angles),
    }
}

fn compute_placidus(t: f64, latitude: f64, longitude: f64, angles: &ChartAngles) -> HouseOutcome {
    if latitude.abs() >= PLACIDUS_MAX_LATITUDE_DEG {
        warn!(
            "Placidus requested at latitude {latitude:.3}; falling back to Equal houses"
        );
        return HouseOutcome {
            cusps: HouseCusps::new(equal_cusps(angles.ascendant)),
            effective_system: HouseSystem::Equal,
            warning: Some(CalculationWarning::PlacidusFallbackEqualHighLat),
        };
    }

    match placidus_cusps(t, longitude, angles) {
        Some(cusps) => HouseOutcome {
            cusps: HouseCusps::new(cusps),
            effective_system: HouseSystem::Placidus,
            warning: None,
        },
        None => {
            warn!("Placidus solver produced a non-finite cusp; falling back to Equal houses");
            HouseOutcome {
                cusps: HouseCusps::new(equal_cusps(angles.ascendant)),
                effective_system: HouseSystem::Equal,
                warning: Some(CalculationWarning::PlacidusSolverFailedFallbackEqual),
            }
        }
    }
}

/// Whole Sign: cusp 1 is the boundary of the sign holding the Ascendant (the
/// sign start, not the Ascendant itself), then one sign per house.
fn whole_sign_cusps(ascendant: f64) -> [f64; 12] {
    let asc = normalize_360(ascendant);
    let sign_index = (asc / 30.0).floor();
    let cusp1 = sign_index * 30.0;

    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(cusp1 + i as f64 * 30.0);
    }
    cusps
}

/// Equal: cusp n = Ascendant + (n−1)·30°.
fn equal_cusps(ascendant: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant + i as f64 * 30.0);
    }
    cusps
}

/// Simplified Placidus: cusp 1 = ASC, cusp 10 = MC, cusps 4 and 7 are forced
/// to the Ascendant's antipode (true Placidus has distinct 4th and 7th cusps;
/// this engine keeps the historical approximation). Cusps 11, 12, 2, 3 come
/// from the MC formula with LST shifted by 30/60/120/150°, and 5, 6, 8, 9 are
/// their antipodes.
///
/// Returns `None` when any cusp comes out non-finite.
fn placidus_cusps(t: f64, longitude: f64, angles: &ChartAngles) -> Option<[f64; 12]> {
    let mut cusps = [0.0; 12];

    cusps[0] = angles.ascendant;
    cusps[3] = normalize_360(angles.ascendant + 180.0);
    cusps[6] = normalize_360(angles.ascendant + 180.0);
    cusps[9] = angles.midheaven;

    let obl_rad = mean_obliquity(t).to_radians();
    let local_sidereal = lst(gmst(t), longitude);

    cusps[10] = intermediate_cusp(local_sidereal, 30.0, obl_rad); // house 11
    cusps[11] = intermediate_cusp(local_sidereal, 60.0, obl_rad); // house 12
    cusps[1] = intermediate_cusp(local_sidereal, 120.0, obl_rad); // house 2
    cusps[2] = intermediate_cusp(local_sidereal, 150.0, obl_rad); // house 3

    cusps[4] = normalize_360(cusps[10] + 180.0); // house 5
    cusps[5] = normalize_360(cusps[11] + 180.0); // house 6
    cusps[7] = normalize_360(cusps[1] + 180.0); // house 8
    cusps[8] = normalize_360(cusps[2] + 180.0); // house 9

    if cusps.iter().all(|c| c.is_finite()) {
        Some(cusps)
    } else {
        None
    }
}

/// Semi-arc offset approximation: run the shifted LST through the same angle
/// formula as the Midheaven.
fn intermediate_cusp(local_sidereal: f64, offset: f64, obl_rad: f64) -> f64 {
    let shifted = normalize_360(local_sidereal + offset).to_radians();

    let y = shifted.sin() * obl_rad.cos();
    let x = shifted.cos();

    atan2_degrees(y, x)
}

#[path = "houses_tests.rs"]
mod houses_tests;
