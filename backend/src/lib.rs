//! # Natal Chart Calculation Kernel
//!
//! This crate is the astronomical/astrological calculation engine behind a
//! natal (birth) chart service. Given a birth instant in UTC and geographic
//! coordinates, it derives planetary ecliptic positions, chart angles
//! (Ascendant/Midheaven), house cusps under a selectable house system,
//! zodiac sign placements, and inter-planet aspects.
//!
//! ## Features
//!
//! - **Time Handling**: UTC instant to Julian Date and Julian centuries (T)
//! - **Sidereal Time**: Greenwich and Local Mean Sidereal Time
//! - **Ephemerides**: truncated-series ecliptic longitudes for the Sun, Moon,
//!   and the eight classical/outer planets
//! - **Houses**: Placidus (with automatic high-latitude fallback), Equal, and
//!   Whole Sign cusp computation
//! - **Aspects**: major-aspect detection with luminary-aware orbs
//! - **Batch Processing**: bounded parallel fan-out over independent requests
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`api`]: request/response types, input validation, and the error type
//! - [`models`]: core domain types (bodies, signs, cusps, time scale)
//! - [`services`]: the calculation services, leaves first (angle math,
//!   obliquity, sidereal time, ephemeris) up to full chart assembly
//!
//! ## Accuracy
//!
//! Ephemerides use truncated mean-element series: "observational accuracy",
//! not JPL-grade accuracy. The Placidus solver fixes cusps 4 and 7 at the
//! Ascendant's antipode and derives the intermediate cusps from a simplified
//! offset method; both are accepted approximations of this engine.
//!
//! ## Concurrency
//!
//! Every calculation is a pure function of its inputs. The kernel holds no
//! shared mutable state and performs no I/O, so callers may invoke it from
//! any number of threads without synchronization.

pub mod api;
pub mod models;
pub mod services;
