//! Calculation services, leaves first.
//!
//! The dependency flow mirrors the computation: the time scale feeds
//! sidereal time, obliquity, and the ephemeris; the angle solver feeds the
//! house solver; sign/house assignment and aspect detection consume the
//! ephemeris output together with the final cusps.

pub mod angles;
pub mod aspects;
pub mod astro_math;
pub mod batch;
pub mod chart;
pub mod ephemeris;
pub mod houses;
pub mod obliquity;
pub mod sidereal;
pub mod sign_house;

pub use batch::{calculate_charts, BatchOptions};
pub use chart::calculate_chart;
pub use houses::{compute_houses, HouseOutcome, PLACIDUS_MAX_LATITUDE_DEG};
