//! Ascendant and Midheaven.
//!
//! Standard spherical astronomy formulas (Meeus, "Astronomical Algorithms"
//! 2nd ed, Chapters 12–14) driven by local sidereal time, the mean
//! obliquity of date and the observer's latitude.

use natal_frames::mean_obliquity_deg;
use natal_time::{gmst_deg, local_sidereal_time_deg, normalize_degrees};
use serde::{Deserialize, Serialize};

/// How the Ascendant's half-circle ambiguity is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AscendantRule {
    /// The Ascendant lies in the 180° arc east of the Midheaven.
    #[default]
    EasternHorizon,
    /// Flip by 180° according to the half-circle of LST: add when LST is in
    /// [0, 180) and the raw value is below 180, subtract when LST is in
    /// [180, 360) and the raw value is 180 or more.
    ///
    /// Reproduces legacy charts; it returns the Descendant for LST in
    /// [0, 90) and [180, 270).
    LstHalfCircle,
}

/// Angles of one chart, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAngles {
    pub lst_deg: f64,
    pub obliquity_deg: f64,
    pub midheaven_deg: f64,
    pub ascendant_deg: f64,
}

/// Midheaven from local sidereal time and obliquity.
///
/// `MC = atan2(sin LST, cos LST · cos ε)`
pub fn midheaven_from_lst(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_degrees(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Ascendant from local sidereal time, latitude and obliquity.
///
/// `Asc = atan2(cos LST, −(sin LST · cos ε + tan φ · sin ε))`, then the
/// quadrant `rule`.
pub fn ascendant_from_lst(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    rule: AscendantRule,
) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let raw = normalize_degrees(
        f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin())).to_degrees(),
    );

    let lst_deg = normalize_degrees(lst_deg);
    let asc = match rule {
        AscendantRule::EasternHorizon => {
            let mc = midheaven_from_lst(lst_deg, obliquity_deg);
            if normalize_degrees(raw - mc) >= 180.0 {
                raw + 180.0
            } else {
                raw
            }
        }
        AscendantRule::LstHalfCircle => {
            if lst_deg < 180.0 && raw < 180.0 {
                raw + 180.0
            } else if lst_deg >= 180.0 && raw >= 180.0 {
                raw - 180.0
            } else {
                raw
            }
        }
    };
    normalize_degrees(asc)
}

/// Ascendant for a moment and place.
///
/// `julian_day` is UT, `julian_century` counts from J2000.0, latitude is
/// geographic and longitude positive east, all in degrees.
///
/// With the default [`AscendantRule::EasternHorizon`] this is the rising
/// point east of the Midheaven. It differs from the legacy LST half-circle
/// correction, which yields the Descendant for LST in [0, 90) and
/// [180, 270); pass [`AscendantRule::LstHalfCircle`] to reproduce legacy
/// charts.
pub fn ascendant_deg(
    julian_day: f64,
    julian_century: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    rule: AscendantRule,
) -> f64 {
    chart_angles(julian_day, julian_century, latitude_deg, longitude_deg, rule).ascendant_deg
}

/// LST, obliquity, Midheaven and Ascendant sharing one sidereal time.
pub fn chart_angles(
    julian_day: f64,
    julian_century: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    rule: AscendantRule,
) -> ChartAngles {
    let lst_deg = local_sidereal_time_deg(gmst_deg(julian_day), longitude_deg);
    let obliquity_deg = mean_obliquity_deg(julian_century);
    let angles = ChartAngles {
        lst_deg,
        obliquity_deg,
        midheaven_deg: midheaven_from_lst(lst_deg, obliquity_deg),
        ascendant_deg: ascendant_from_lst(lst_deg, latitude_deg, obliquity_deg, rule),
    };
    log::trace!(
        "LST {:.4}° ε {:.4}° MC {:.4}° Asc {:.4}°",
        angles.lst_deg,
        angles.obliquity_deg,
        angles.midheaven_deg,
        angles.ascendant_deg
    );
    angles
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.439_291;

    #[test]
    fn equator_lst_zero_rises_cancer_point() {
        // At LST 0 the vernal point culminates and 90° rises.
        let asc = ascendant_from_lst(0.0, 0.0, EPS, AscendantRule::EasternHorizon);
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
        assert!(midheaven_from_lst(0.0, EPS).abs() < 1e-9);
    }

    #[test]
    fn equator_quadrants() {
        for (lst, expected) in [(90.0, 180.0), (180.0, 270.0), (270.0, 0.0)] {
            let asc = ascendant_from_lst(lst, 0.0, EPS, AscendantRule::EasternHorizon);
            let err = normalize_degrees(asc - expected + 180.0) - 180.0;
            assert!(err.abs() < 1e-9, "LST {lst}: asc = {asc}");
        }
    }

    #[test]
    fn ascendant_east_of_midheaven() {
        for lat in [-60.0, -33.9, 0.0, 19.4, 40.7, 51.5, 64.0] {
            for i in 0..72 {
                let lst = i as f64 * 5.0;
                let asc = ascendant_from_lst(lst, lat, EPS, AscendantRule::EasternHorizon);
                let mc = midheaven_from_lst(lst, EPS);
                let d = normalize_degrees(asc - mc);
                assert!(d > 0.0 && d < 180.0, "lat {lat} LST {lst}: asc {asc} mc {mc}");
            }
        }
    }

    #[test]
    fn rule_is_inactive_outside_polar_circles() {
        // Raw atan2 already yields the eastern point; the rule only guards
        // degenerate horizons.
        for i in 0..36 {
            let lst = i as f64 * 10.0 + 3.0;
            let asc = ascendant_from_lst(lst, 45.0, EPS, AscendantRule::EasternHorizon);
            let lst_r = lst.to_radians();
            let eps = EPS.to_radians();
            let phi = 45.0_f64.to_radians();
            let raw = f64::atan2(lst_r.cos(), -(lst_r.sin() * eps.cos() + phi.tan() * eps.sin()));
            assert!((asc - normalize_degrees(raw.to_degrees())).abs() < 1e-9);
        }
    }

    #[test]
    fn half_circle_rule_flips_first_quadrant() {
        let east = ascendant_from_lst(30.0, 0.0, EPS, AscendantRule::EasternHorizon);
        let legacy = ascendant_from_lst(30.0, 0.0, EPS, AscendantRule::LstHalfCircle);
        assert!((normalize_degrees(legacy - east) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn half_circle_rule_agrees_in_second_quadrant() {
        for lst in [95.0, 120.0, 150.0, 175.0, 275.0, 300.0, 355.0] {
            let east = ascendant_from_lst(lst, 10.0, EPS, AscendantRule::EasternHorizon);
            let legacy = ascendant_from_lst(lst, 10.0, EPS, AscendantRule::LstHalfCircle);
            assert!((east - legacy).abs() < 1e-9, "LST {lst}: {east} vs {legacy}");
        }
    }

    #[test]
    fn london_j2000() {
        let jd = 2_451_545.0;
        let a = chart_angles(jd, 0.0, 51.48, 0.0, AscendantRule::EasternHorizon);
        assert!((a.lst_deg - 280.46).abs() < 0.01, "LST = {}", a.lst_deg);
        assert!((a.midheaven_deg - 279.6).abs() < 0.2, "MC = {}", a.midheaven_deg);
        assert!((a.ascendant_deg - 24.3).abs() < 0.3, "Asc = {}", a.ascendant_deg);
    }

    #[test]
    fn serde_names() {
        let r: AscendantRule = serde_json::from_str("\"lst-half-circle\"").unwrap();
        assert_eq!(r, AscendantRule::LstHalfCircle);
        assert_eq!(AscendantRule::default(), AscendantRule::EasternHorizon);
    }
}
