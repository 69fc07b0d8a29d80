//! Domain models for natal chart computation.
//!
//! These types carry the language-neutral calculation results. Every enum
//! serializes in SCREAMING_SNAKE_CASE so that the wire vocabulary matches the
//! opaque codes the calling layer translates for display.

use serde::{Deserialize, Serialize};

/// The ten bodies the ephemeris covers, in canonical chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// All bodies in canonical order: luminaries first, then the planets
    /// outward from the Sun.
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Sun and Moon get the wider aspect orb.
    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

/// The twelve tropical zodiac signs, 30 degrees each, starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign index 0-11 where 0 = Aries.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Zodiac mode. The kernel computes tropical charts only; sidereal requests
/// are rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zodiac {
    #[default]
    Tropical,
    Sidereal,
}

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Equal,
    WholeSign,
}

/// Machine-readable warning codes surfaced to the caller for localization.
///
/// These never carry display text; the calling layer owns the translation
/// tables keyed on the serialized code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationWarning {
    /// Placidus was requested at |latitude| >= 66°; Equal houses substituted.
    PlacidusFallbackEqualHighLat,
    /// The Placidus solver produced a non-finite cusp; Equal houses substituted.
    PlacidusSolverFailedFallbackEqual,
}

impl CalculationWarning {
    /// The stable wire code for this warning.
    pub fn code(&self) -> &'static str {
        match self {
            CalculationWarning::PlacidusFallbackEqualHighLat => "PLACIDUS_FALLBACK_EQUAL_HIGH_LAT",
            CalculationWarning::PlacidusSolverFailedFallbackEqual => {
                "PLACIDUS_SOLVER_FAILED_FALLBACK_EQUAL"
            }
        }
    }
}

/// Chart angles: the two longitudes anchoring the house wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    /// Ecliptic longitude rising on the eastern horizon, degrees [0, 360).
    pub ascendant: f64,
    /// Ecliptic longitude culminating at the meridian, degrees [0, 360).
    pub midheaven: f64,
}

/// The twelve house cusp longitudes, houses 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps([f64; 12]);

impl HouseCusps {
    pub fn new(cusps: [f64; 12]) -> Self {
        Self(cusps)
    }

    /// Cusp longitude for the given house number (1-12).
    ///
    /// # Panics
    ///
    /// Panics if `house` is outside 1..=12.
    pub fn cusp(&self, house: usize) -> f64 {
        assert!((1..=12).contains(&house), "house number must be 1..=12");
        self.0[house - 1]
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Ecliptic position of a single body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude, degrees [0, 360).
    pub longitude: f64,
}

/// The five major aspect types, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    /// Detection order doubles as the tie-break policy: the first type whose
    /// orb tolerance covers the separation wins.
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    /// The aspect's defining angle in degrees.
    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
        }
    }
}

/// A detected aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    /// First body of the pair; always before `body_b` in canonical order.
    pub body_a: Body,
    pub body_b: Body,
    pub aspect: AspectType,
    /// The aspect's defining angle, not the actual separation.
    pub exact_angle: f64,
    /// Absolute deviation of the separation from the exact angle, degrees.
    pub orb: f64,
    /// Always `None`: angular velocities are not modeled, so applying vs
    /// separating is unknown.
    pub applying: Option<bool>,
}
