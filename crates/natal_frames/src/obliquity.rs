//! Mean obliquity of the ecliptic.
//!
//! Linear form of the IAU 1980 expression (Meeus Eq. 22.2 truncated after
//! the T term), which is well inside a hundredth of a degree for ±5 centuries.

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291;

/// Obliquity rate in degrees per Julian century.
const OBLIQUITY_RATE_DEG: f64 = -0.013_004_2;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG * t
}
