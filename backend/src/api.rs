//! Request/response types for chart calculation.
//!
//! The kernel's contract is language-neutral: inputs arrive fully resolved
//! (a UTC instant and coordinates — no timezone databases or geocoding here)
//! and the response carries opaque SCREAMING_SNAKE codes the caller localizes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    AspectRecord, Body, CalculationWarning, HouseSystem, Zodiac, ZodiacSign,
};

/// A fully-resolved chart calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Birth instant already converted to UTC by the caller.
    pub utc_instant: DateTime<Utc>,
    /// Geographic latitude, degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Geographic longitude, degrees east-positive, [-180, 180].
    pub longitude_deg: f64,
    /// Requested house system (default Placidus).
    #[serde(default)]
    pub house_system: HouseSystem,
    /// Zodiac mode; anything but tropical is rejected.
    #[serde(default)]
    pub zodiac: Zodiac,
    /// Whether to run aspect detection (default: true).
    #[serde(default = "default_true")]
    pub include_aspects: bool,
}

fn default_true() -> bool {
    true
}

impl ChartRequest {
    /// Validate the request before it enters the kernel. The calculation
    /// services themselves are total and assume well-formed input.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.zodiac != Zodiac::Tropical {
            return Err(ChartError::UnsupportedZodiac);
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) || !self.latitude_deg.is_finite() {
            return Err(ChartError::LatitudeOutOfRange(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) || !self.longitude_deg.is_finite() {
            return Err(ChartError::LongitudeOutOfRange(self.longitude_deg));
        }
        Ok(())
    }
}

/// Errors rejected at the API boundary. House degradation is never an error;
/// it surfaces through [`CalculationWarning`] instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartError {
    #[error("only the TROPICAL zodiac is supported")]
    UnsupportedZodiac,
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// A batch worker task could not be joined.
    #[error("calculation task failed: {0}")]
    TaskFailed(String),
}

/// Ascendant and Midheaven, decorated with their signs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglesDto {
    pub ascendant_longitude: f64,
    pub ascendant_sign: ZodiacSign,
    pub midheaven_longitude: f64,
    pub midheaven_sign: ZodiacSign,
}

/// A single house cusp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseDto {
    /// House number, 1-12.
    pub number: u8,
    pub cusp_longitude: f64,
    pub sign: ZodiacSign,
}

/// Placement of one body in the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Degree within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// House number, 1-12.
    pub house: u8,
}

/// A complete computed natal chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub requested_house_system: HouseSystem,
    /// Equals the requested system unless a Placidus fallback fired.
    pub effective_house_system: HouseSystem,
    /// Machine-readable degradation codes; empty means a clean computation.
    pub warnings: Vec<CalculationWarning>,
    pub angles: AnglesDto,
    /// Exactly 12 entries, houses 1 through 12.
    pub houses: Vec<HouseDto>,
    /// One placement per body, Sun and Moon first.
    pub bodies: Vec<BodyPlacement>,
    /// Empty when `include_aspects` was false.
    pub aspects: Vec<AspectRecord>,
}
