//! Planar vectors in the ecliptic plane.
//!
//! Positions are treated as lying in the ecliptic (small-inclination
//! approximation), so a longitude and a radius fully describe them.

use std::ops::Sub;

use natal_time::normalize_degrees;

/// A 2-D vector in the ecliptic plane, in AU.
///
/// +x points to the reference equinox, +y to longitude 90°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticVector {
    pub x: f64,
    pub y: f64,
}

impl EclipticVector {
    /// Build from ecliptic longitude (degrees) and radius (AU).
    pub fn from_polar(lon_deg: f64, radius_au: f64) -> Self {
        let (sin, cos) = lon_deg.to_radians().sin_cos();
        Self {
            x: radius_au * cos,
            y: radius_au * sin,
        }
    }

    /// Longitude in degrees, [0, 360). Zero for the null vector.
    pub fn longitude_deg(self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        normalize_degrees(self.y.atan2(self.x).to_degrees())
    }
}

impl Sub for EclipticVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
