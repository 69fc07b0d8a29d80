//! Full natal chart assembly.
//!
//! Wires the calculation services together: time scale, ephemeris, angles,
//! houses, placements, aspects. Pure apart from logging; invoking it
//! concurrently from any number of threads is always safe.

use log::debug;

use crate::api::{AnglesDto, BodyPlacement, ChartError, ChartRequest, ChartResponse, HouseDto};
use crate::models::{julian_centuries_from_datetime, HouseSystem};
use crate::services::angles::compute_angles;
use crate::services::aspects::detect_aspects;
use crate::services::ephemeris::body_longitudes;
use crate::services::houses::compute_houses;
use crate::services::sign_house::{degree_in_sign, house_of, sign_of, whole_sign_house};

/// Compute a complete natal chart for a validated request.
///
/// The only possible errors are input-validation rejections; every
/// calculation step downstream is total. Degraded house computation surfaces
/// as warnings on an otherwise valid response.
pub fn calculate_chart(request: &ChartRequest) -> Result<ChartResponse, ChartError> {
    request.validate()?;

    debug!(
        "calculating chart: instant={} lat={:.3} lon={:.3} system={:?}",
        request.utc_instant, request.latitude_deg, request.longitude_deg, request.house_system
    );

    let t = julian_centuries_from_datetime(&request.utc_instant);

    let positions = body_longitudes(t);
    let angles = compute_angles(t, request.latitude_deg, request.longitude_deg);
    let houses = compute_houses(
        request.house_system,
        t,
        request.latitude_deg,
        request.longitude_deg,
        &angles,
    );

    let warnings = houses.warning.into_iter().collect();

    let bodies = positions
        .iter()
        .map(|position| {
            let house = if houses.effective_system == HouseSystem::WholeSign {
                whole_sign_house(position.longitude, angles.ascendant)
            } else {
                house_of(position.longitude, &houses.cusps)
            };
            BodyPlacement {
                body: position.body,
                longitude: position.longitude,
                sign: sign_of(position.longitude),
                degree_in_sign: degree_in_sign(position.longitude),
                house,
            }
        })
        .collect();

    let aspects = if request.include_aspects {
        detect_aspects(&positions)
    } else {
        Vec::new()
    };

    let house_dtos = houses
        .cusps
        .iter()
        .enumerate()
        .map(|(i, cusp)| HouseDto {
            number: (i + 1) as u8,
            cusp_longitude: cusp,
            sign: sign_of(cusp),
        })
        .collect();

    Ok(ChartResponse {
        requested_house_system: request.house_system,
        effective_house_system: houses.effective_system,
        warnings,
        angles: AnglesDto {
            ascendant_longitude: angles.ascendant,
            ascendant_sign: sign_of(angles.ascendant),
            midheaven_longitude: angles.midheaven,
            midheaven_sign: sign_of(angles.midheaven),
        },
        houses: house_dtos,
        bodies,
        aspects,
    })
}

#[path = "chart_tests.rs"]
mod chart_tests;
