//! Geocentric tropical longitudes for every body at one epoch.

use natal_frames::j2000_to_date_deg;
use natal_time::{JulianEpoch, normalize_degrees};

use crate::body::{ALL_BODIES, Body};
use crate::geocentric::{EarthPosition, earth_position, heliocentric_to_geocentric};
use crate::moon::moon_longitude_deg;
use crate::planets::planet_heliocentric;
use crate::sun::{SolarPosition, sun_position};

/// Positions shared by all bodies at one epoch.
///
/// The Sun and Earth's orbit are evaluated once; each planet then needs
/// only its own Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    epoch: JulianEpoch,
    sun: SolarPosition,
    earth: EarthPosition,
}

impl Ephemeris {
    pub fn at(epoch: JulianEpoch) -> Self {
        let t = epoch.julian_century();
        Self {
            epoch,
            sun: sun_position(t),
            earth: earth_position(t),
        }
    }

    pub fn epoch(&self) -> JulianEpoch {
        self.epoch
    }

    pub fn sun(&self) -> SolarPosition {
        self.sun
    }

    /// Heliocentric Earth, J2000 ecliptic.
    pub fn earth(&self) -> EarthPosition {
        self.earth
    }

    /// Geocentric ecliptic longitude of `body`, mean equinox of date,
    /// degrees in [0, 360).
    pub fn longitude_deg(&self, body: Body) -> f64 {
        let t = self.epoch.julian_century();
        let lon = match (body, planet_heliocentric(body, t)) {
            (_, Some(p)) => self.to_date(
                p.longitude_deg,
                p.elements.semi_major_axis_au,
                p.elements.eccentricity,
                p.mean_anomaly_deg,
            ),
            (Body::Moon, None) => moon_longitude_deg(t),
            (_, None) => self.sun.longitude_deg,
        };
        log::trace!("{} λ = {lon:.4}° at JD {:.5}", body.name(), self.epoch.julian_day());
        lon
    }

    /// Longitudes of all bodies in [`ALL_BODIES`] order.
    pub fn longitudes(&self) -> [f64; 10] {
        ALL_BODIES.map(|b| self.longitude_deg(b))
    }

    fn to_date(&self, helio_lon: f64, a: f64, e: f64, mean_anomaly_deg: f64) -> f64 {
        let geo = heliocentric_to_geocentric(
            helio_lon,
            a,
            e,
            mean_anomaly_deg,
            self.earth.longitude_deg,
            self.earth.radius_au,
        );
        normalize_degrees(j2000_to_date_deg(geo, self.epoch.julian_century()))
    }
}

/// Geocentric longitude of one body without keeping the shared state.
pub fn geocentric_longitude_deg(body: Body, epoch: JulianEpoch) -> f64 {
    Ephemeris::at(epoch).longitude_deg(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_time::J2000_JD;

    #[test]
    fn all_longitudes_normalized() {
        for i in 0..40 {
            let eph = Ephemeris::at(JulianEpoch::from_jd(J2000_JD + i as f64 * 913.7));
            for lon in eph.longitudes() {
                assert!((0.0..360.0).contains(&lon), "lon = {lon}");
            }
        }
    }

    #[test]
    fn sun_matches_solar_model() {
        let epoch = JulianEpoch::from_jd(J2000_JD + 1234.5);
        let eph = Ephemeris::at(epoch);
        assert_eq!(eph.longitude_deg(Body::Sun), eph.sun().longitude_deg);
    }

    #[test]
    fn earth_opposes_sun() {
        let eph = Ephemeris::at(JulianEpoch::from_jd(J2000_JD + 500.0));
        let earth_of_date = j2000_to_date_deg(eph.earth().longitude_deg, eph.epoch().julian_century());
        let gap = normalize_degrees(earth_of_date + 180.0 - eph.sun().longitude_deg);
        let gap = if gap > 180.0 { 360.0 - gap } else { gap };
        assert!(gap < 0.05, "Earth/Sun disagreement {gap}°");
    }

    #[test]
    fn free_function_matches_cached() {
        let epoch = JulianEpoch::from_jd(2_447_000.25);
        let eph = Ephemeris::at(epoch);
        for body in ALL_BODIES {
            assert_eq!(geocentric_longitude_deg(body, epoch), eph.longitude_deg(body));
        }
    }

    #[test]
    fn mercury_stays_near_sun() {
        for i in 0..60 {
            let eph = Ephemeris::at(JulianEpoch::from_jd(J2000_JD + i as f64 * 37.0));
            let d = natal_time::signed_separation_deg(
                eph.longitude_deg(Body::Mercury),
                eph.sun().longitude_deg,
            );
            assert!(d.abs() < 29.0, "Mercury elongation {d}");
            let v = natal_time::signed_separation_deg(
                eph.longitude_deg(Body::Venus),
                eph.sun().longitude_deg,
            );
            assert!(v.abs() < 48.5, "Venus elongation {v}");
        }
    }
}
