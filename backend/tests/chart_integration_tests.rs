//! End-to-end chart calculation scenarios.

use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};

use natal_core::api::{ChartRequest, ChartResponse};
use natal_core::models::{Body, HouseSystem, Zodiac, ZodiacSign};
use natal_core::services::{calculate_chart, calculate_charts, BatchOptions};

/// 1996-04-23 14:35 Europe/Istanbul (UTC+3) = 11:35 UTC, Kadıköy coordinates.
fn istanbul_request() -> ChartRequest {
    ChartRequest {
        utc_instant: Utc.with_ymd_and_hms(1996, 4, 23, 11, 35, 0).unwrap(),
        latitude_deg: 40.983,
        longitude_deg: 29.029,
        house_system: HouseSystem::Placidus,
        zodiac: Zodiac::Tropical,
        include_aspects: true,
    }
}

#[test]
fn istanbul_chart_end_to_end() -> Result<()> {
    let chart = calculate_chart(&istanbul_request())?;

    assert_eq!(chart.bodies.len(), 10);
    assert_eq!(chart.houses.len(), 12);
    assert_eq!(chart.effective_house_system, HouseSystem::Placidus);
    assert!(chart.warnings.is_empty());

    let sun = chart
        .bodies
        .iter()
        .find(|b| b.body == Body::Sun)
        .expect("Sun missing from chart");
    assert!(
        sun.sign == ZodiacSign::Aries || sun.sign == ZodiacSign::Taurus,
        "late-April Sun was in {:?}",
        sun.sign
    );

    // Aspect records are well-formed when present
    for aspect in &chart.aspects {
        assert!(aspect.body_a < aspect.body_b);
        assert!(aspect.orb <= 8.0);
        assert!(aspect.applying.is_none());
    }
    Ok(())
}

#[test]
fn house_numbers_cover_wheel_for_each_system() -> Result<()> {
    for system in [HouseSystem::Placidus, HouseSystem::Equal, HouseSystem::WholeSign] {
        let mut request = istanbul_request();
        request.house_system = system;
        let chart = calculate_chart(&request)?;

        let numbers: Vec<u8> = chart.houses.iter().map(|h| h.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
        for house in &chart.houses {
            assert!((0.0..360.0).contains(&house.cusp_longitude));
        }
    }
    Ok(())
}

#[test]
fn polar_latitude_degrades_but_still_answers() -> Result<()> {
    let mut request = istanbul_request();
    request.latitude_deg = 78.22; // Longyearbyen
    request.longitude_deg = 15.63;

    let chart = calculate_chart(&request)?;

    assert_eq!(chart.requested_house_system, HouseSystem::Placidus);
    assert_eq!(chart.effective_house_system, HouseSystem::Equal);
    assert_eq!(chart.warnings.len(), 1);
    assert_eq!(chart.warnings[0].code(), "PLACIDUS_FALLBACK_EQUAL_HIGH_LAT");
    assert_eq!(chart.houses.len(), 12);
    Ok(())
}

#[test]
fn response_round_trips_through_json() -> Result<()> {
    let chart = calculate_chart(&istanbul_request())?;
    let json = serde_json::to_string(&chart)?;
    let back: ChartResponse = serde_json::from_str(&json)?;

    assert_eq!(back.bodies.len(), chart.bodies.len());
    assert_eq!(back.effective_house_system, chart.effective_house_system);
    assert_eq!(back.angles.ascendant_sign, chart.angles.ascendant_sign);
    Ok(())
}

#[tokio::test]
async fn concurrent_batch_has_no_cross_talk() -> Result<()> {
    // 64 distinct instants across two months
    let requests: Vec<ChartRequest> = (0..64)
        .map(|i| {
            let mut request = istanbul_request();
            request.utc_instant = request.utc_instant + Duration::hours(i * 17);
            request
        })
        .collect();

    let sequential: Vec<ChartResponse> = requests
        .iter()
        .map(|r| calculate_chart(r))
        .collect::<Result<_, _>>()?;

    let parallel = calculate_charts(requests, BatchOptions { max_concurrency: 16 }).await;

    for (seq, par) in sequential.iter().zip(parallel.into_iter()) {
        let par = par?;
        assert_eq!(seq.effective_house_system, par.effective_house_system);
        assert_eq!(seq.aspects.len(), par.aspects.len());
        for (a, b) in seq.bodies.iter().zip(par.bodies.iter()) {
            assert_eq!(a.longitude.to_bits(), b.longitude.to_bits());
            assert_eq!(a.house, b.house);
        }
    }
    Ok(())
}
