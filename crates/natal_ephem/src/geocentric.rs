//! Heliocentric to geocentric conversion in the ecliptic plane.

use natal_time::normalize_degrees;
use natal_frames::EclipticVector;

use crate::elements::EARTH;
use crate::kepler::{HeliocentricPosition, orbital_radius_au, solve_kepler};

/// Heliocentric position of the Earth–Moon barycenter, J2000 ecliptic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthPosition {
    /// Degrees in [0, 360).
    pub longitude_deg: f64,
    /// AU.
    pub radius_au: f64,
}

/// Earth's heliocentric position at `t` Julian centuries since J2000.0.
pub fn earth_position(t: f64) -> EarthPosition {
    let pos = HeliocentricPosition::from_elements(&EARTH.at(t));
    EarthPosition {
        longitude_deg: pos.longitude_deg,
        radius_au: pos.radius_au,
    }
}

/// Geocentric longitude of a planet given its heliocentric longitude.
///
/// The planet's radius is recovered from `a`, `e` and mean anomaly `M`
/// (degrees) by a Kepler solve; both bodies are placed as vectors in the
/// ecliptic plane and Earth's vector is subtracted. Result in [0, 360).
pub fn heliocentric_to_geocentric(
    planet_longitude_deg: f64,
    semi_major_axis_au: f64,
    eccentricity: f64,
    mean_anomaly_deg: f64,
    earth_longitude_deg: f64,
    earth_radius_au: f64,
) -> f64 {
    let ea = solve_kepler(mean_anomaly_deg.to_radians(), eccentricity);
    let r = orbital_radius_au(semi_major_axis_au, eccentricity, ea);
    let planet = EclipticVector::from_polar(planet_longitude_deg, r);
    let earth = EclipticVector::from_polar(earth_longitude_deg, earth_radius_au);
    normalize_degrees((planet - earth).longitude_deg())
}
