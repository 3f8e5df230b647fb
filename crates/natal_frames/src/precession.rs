//! General precession in ecliptic longitude.
//!
//! Orbital elements are referred to the J2000 equinox while the Sun and
//! Moon series yield longitudes of date. Adding the accumulated precession
//! puts every body in the same tropical frame.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IAU 2006 p_A), first two
//! terms; higher orders stay below 0.01″ over ±10 centuries.

/// Accumulated general precession since J2000.0, in degrees.
///
/// `t` = Julian centuries since J2000.0. Positive for dates after J2000:
/// tropical longitudes of fixed directions increase.
pub fn general_precession_deg(t: f64) -> f64 {
    (5028.796_195 + 1.105_434_8 * t) * t / 3600.0
}

/// Carry an ecliptic longitude from the J2000 equinox to the mean equinox
/// of date. The result is not normalized.
pub fn j2000_to_date_deg(lon_j2000_deg: f64, t: f64) -> f64 {
    lon_j2000_deg + general_precession_deg(t)
}
