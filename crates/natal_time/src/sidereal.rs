//! Greenwich and local mean sidereal time.
//!
//! GMST uses the linear-in-days expression with the quadratic century term
//! (Meeus, "Astronomical Algorithms" 2nd ed, Eq. 12.4, cubic term dropped).
//! UT and UTC are treated as identical; the difference is below a second.

use crate::angle::normalize_degrees;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T²
/// where d = JD − 2451545.0 and T = d / 36525.
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    normalize_degrees(280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t)
}

/// Local Sidereal Time from GMST and observer east longitude, both in degrees.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_degrees(gmst_deg + longitude_east_deg)
}
