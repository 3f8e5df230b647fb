//! Time and coordinate foundation for natal chart computation.
//!
//! This crate provides:
//! - Julian Day / Julian century arithmetic on the proleptic Gregorian calendar
//! - Degree normalization shared by every longitude computation
//! - Greenwich and local mean sidereal time
//! - `BirthMoment`, the validated input instant and place

pub mod angle;
pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use angle::{normalize_degrees, signed_separation_deg};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, JulianEpoch, days_in_month, is_leap_year, jd_to_calendar,
    julian_century, julian_day, julian_day_number,
};
pub use moment::{BirthInput, BirthMoment};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
