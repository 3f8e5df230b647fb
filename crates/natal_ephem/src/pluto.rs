//! Heliocentric longitude of Pluto.
//!
//! Pluto's eccentricity (~0.25) and inclination (~17°) are too large for
//! the planar Kepler solve to give its ecliptic longitude directly. The
//! mean longitude is corrected by the equation of center expanded to e³
//! and then reduced from the orbit plane to the ecliptic.

use natal_time::normalize_degrees;

use crate::elements::PLUTO;

/// Equation of center to third order in e, degrees.
fn equation_of_center_deg(e: f64, mean_anomaly_rad: f64) -> f64 {
    let e2 = e * e;
    let e3 = e2 * e;
    let m = mean_anomaly_rad;
    ((2.0 * e - e3 / 4.0) * m.sin()
        + 1.25 * e2 * (2.0 * m).sin()
        + 13.0 / 12.0 * e3 * (3.0 * m).sin())
    .to_degrees()
}

/// Orbit-plane to ecliptic reduction, degrees. `u` is the argument of latitude.
fn reduction_to_ecliptic_deg(inclination_deg: f64, u_deg: f64) -> f64 {
    let k = (0.5 * inclination_deg.to_radians()).tan();
    -(k * k * (2.0 * u_deg.to_radians()).sin()).to_degrees()
}

/// Heliocentric ecliptic longitude of Pluto, J2000 equinox, degrees [0, 360).
pub fn pluto_heliocentric_longitude_deg(t: f64) -> f64 {
    let el = PLUTO.at(t);
    let m = el.mean_anomaly_deg().to_radians();
    let orbital = el.mean_longitude_deg + equation_of_center_deg(el.eccentricity, m);
    let reduced = orbital + reduction_to_ecliptic_deg(el.inclination_deg, orbital - el.node_deg);
    normalize_degrees(reduced)
}
