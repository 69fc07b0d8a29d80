use serde::*;

/// Julian Date representation.
/// JD 2440587.5 = 1970-01-01 00:00:00 UTC (Unix epoch)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(f64);

/// Julian Date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000: f64 = 2451545.0;

const SECONDS_PER_DAY: f64 = 86400.0;

impl JulianDate {
    /// Create a new Julian Date value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Create from a chrono `DateTime<Utc>` with sub-second precision.
    ///
    /// JD = 2440587.5 + secondsSinceUnixEpoch / 86400
    pub fn from_datetime(dt: &chrono::DateTime<chrono::Utc>) -> Self {
        let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        Self(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY)
    }

    /// Convert to a chrono `DateTime<Utc>`.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = (self.0 - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos).unwrap_or(chrono::DateTime::UNIX_EPOCH)
    }

    /// Julian centuries elapsed since J2000.0.
    ///
    /// T = (JD - 2451545.0) / 36525
    pub fn julian_centuries(&self) -> f64 {
        (self.0 - J2000) / 36525.0
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

/// Convenience: Julian centuries since J2000.0 for a UTC instant.
pub fn julian_centuries_from_datetime(dt: &chrono::DateTime<chrono::Utc>) -> f64 {
    JulianDate::from_datetime(dt).julian_centuries()
}
