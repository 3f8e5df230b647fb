//! Kepler's equation and two-body heliocentric positions.

use natal_time::normalize_degrees;

use crate::elements::ElementsAt;

/// Fixed-point iterations for Kepler's equation.
///
/// The error contracts by a factor of e per step, so ten steps leave less
/// than 1e-6 rad for every orbit in the element tables (e < 0.25).
pub const KEPLER_ITERATIONS: usize = 10;

/// Solve `E = M + e·sin(E)` for the eccentric anomaly, in radians.
pub fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    let mut ea = mean_anomaly_rad;
    for _ in 0..KEPLER_ITERATIONS {
        ea = mean_anomaly_rad + eccentricity * ea.sin();
    }
    ea
}

/// True anomaly from eccentric anomaly (half-angle form), in radians.
pub fn true_anomaly_rad(eccentric_anomaly_rad: f64, eccentricity: f64) -> f64 {
    let (sin_half, cos_half) = (0.5 * eccentric_anomaly_rad).sin_cos();
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * sin_half,
        (1.0 - eccentricity).sqrt() * cos_half,
    )
}

/// Heliocentric radius `a(1 − e·cos E)` in AU.
pub fn orbital_radius_au(semi_major_axis_au: f64, eccentricity: f64, eccentric_anomaly_rad: f64) -> f64 {
    semi_major_axis_au * (1.0 - eccentricity * eccentric_anomaly_rad.cos())
}

/// Heliocentric ecliptic position in the orbit plane (inclination ignored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricPosition {
    /// v + w + Ω, degrees in [0, 360).
    pub longitude_deg: f64,
    /// AU.
    pub radius_au: f64,
}

impl HeliocentricPosition {
    /// Two-body position for a set of evaluated elements.
    pub fn from_elements(el: &ElementsAt) -> Self {
        let m = el.mean_anomaly_deg().to_radians();
        let ea = solve_kepler(m, el.eccentricity);
        let v = true_anomaly_rad(ea, el.eccentricity).to_degrees();
        Self {
            longitude_deg: normalize_degrees(v + el.argument_of_perihelion_deg() + el.node_deg),
            radius_au: orbital_radius_au(el.semi_major_axis_au, el.eccentricity, ea),
        }
    }
}
