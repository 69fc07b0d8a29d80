//! Ascendant and Midheaven from sidereal time, obliquity, and latitude.

use crate::models::ChartAngles;
use crate::services::astro_math::atan2_degrees;
use crate::services::obliquity::mean_obliquity;
use crate::services::sidereal::{gmst, lst};

/// Compute the chart angles for T Julian centuries, geographic latitude and
/// east-positive longitude (both degrees).
///
/// RAMC = LST;
/// MC  = atan2(sin RAMC · cos ε, cos RAMC);
/// ASC = atan2(sin RAMC · cos ε − tan φ · sin ε, cos RAMC).
///
/// At φ = ±90° the tangent term blows up; extreme polar latitudes are a
/// documented limitation, not a handled case.
pub fn compute_angles(t: f64, latitude: f64, longitude: f64) -> ChartAngles {
    let local_sidereal = lst(gmst(t), longitude);
    let obliquity = mean_obliquity(t);

    let lst_rad = local_sidereal.to_radians();
    let obl_rad = obliquity.to_radians();
    let lat_rad = latitude.to_radians();

    let mc_y = lst_rad.sin() * obl_rad.cos();
    let mc_x = lst_rad.cos();
    let midheaven = atan2_degrees(mc_y, mc_x);

    let asc_y = lst_rad.sin() * obl_rad.cos() - lat_rad.tan() * obl_rad.sin();
    let asc_x = lst_rad.cos();
    let ascendant = atan2_degrees(asc_y, asc_x);

    ChartAngles { ascendant, midheaven }
}
