//! Geocentric longitude of the Sun.
//!
//! Mean longitude and mean anomaly polynomials with a three-term equation
//! of center (Meeus, "Astronomical Algorithms" 2nd ed, Chapter 25). The
//! result is the geometric longitude referred to the mean equinox of date;
//! aberration and nutation (< 0.01°) are not applied.

use natal_time::normalize_degrees;

/// Solar longitude and the angles it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// True geometric longitude, degrees in [0, 360).
    pub longitude_deg: f64,
    /// Mean longitude L0, degrees in [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly M, degrees in [0, 360).
    pub mean_anomaly_deg: f64,
}

/// Solar position at `t` Julian centuries since J2000.0.
pub fn sun_position(t: f64) -> SolarPosition {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let mr = m.to_radians();

    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * mr.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * mr).sin()
        + 0.000_289 * (3.0 * mr).sin();

    SolarPosition {
        longitude_deg: normalize_degrees(l0 + center),
        mean_longitude_deg: normalize_degrees(l0),
        mean_anomaly_deg: normalize_degrees(m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_capricorn_ten() {
        let sun = sun_position(0.0);
        assert!((sun.longitude_deg - 280.38).abs() < 0.02, "Sun = {}", sun.longitude_deg);
    }

    #[test]
    fn meeus_example_25a() {
        // 1992-Oct-13 0h TD, T = -0.072183436: true longitude 199.90988°
        let sun = sun_position(-0.072_183_436);
        assert!((sun.longitude_deg - 199.909_88).abs() < 1e-3, "Sun = {}", sun.longitude_deg);
    }

    #[test]
    fn march_equinox_near_zero() {
        // 2024-Mar-20 03:06 UT equinox; T = (2460389.629 - 2451545) / 36525
        let t = (2_460_389.629 - 2_451_545.0) / 36_525.0;
        let lon = sun_position(t).longitude_deg;
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.02, "Sun at equinox = {lon}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let day = 1.0 / 36_525.0;
        let a = sun_position(0.1).longitude_deg;
        let b = sun_position(0.1 + day).longitude_deg;
        let step = normalize_degrees(b - a);
        assert!((0.95..1.03).contains(&step), "step = {step}");
    }
}
