//! Geocentric longitude of the Moon.
//!
//! Mean longitude plus the 19 largest periodic terms of the ELP-2000/82
//! longitude series as tabulated by Meeus ("Astronomical Algorithms" 2nd
//! ed, Chapter 47, Table 47.A). Truncation error stays near 0.1°, well
//! inside the one-degree target. Longitude is referred to the mean equinox
//! of date.

use natal_time::normalize_degrees;

/// Fundamental lunar arguments in degrees (not normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// L′, mean longitude of the Moon.
    pub mean_longitude: f64,
    /// D, mean elongation of the Moon from the Sun.
    pub elongation: f64,
    /// M, mean anomaly of the Sun.
    pub sun_anomaly: f64,
    /// M′, mean anomaly of the Moon.
    pub moon_anomaly: f64,
    /// F, argument of latitude.
    pub latitude_argument: f64,
}

/// Fundamental arguments at `t` Julian centuries since J2000.0.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    LunarArguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2,
        elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2,
        sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2,
        moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2,
        latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2,
    }
}

/// Periodic terms in longitude: multipliers of D, M, M′, F and amplitude.
#[rustfmt::skip]
static TERMS: [[f64; 5]; 19] = [
    //  D     M     M′    F     amplitude (deg)
    [ 0.0,  0.0,  1.0,  0.0,  6.288_774],  // equation of center
    [ 2.0,  0.0, -1.0,  0.0,  1.274_027],  // evection
    [ 2.0,  0.0,  0.0,  0.0,  0.658_314],  // variation
    [ 0.0,  0.0,  2.0,  0.0,  0.213_618],
    [ 0.0,  1.0,  0.0,  0.0, -0.185_116],  // annual equation
    [ 0.0,  0.0,  0.0,  2.0, -0.114_332],  // reduction to the ecliptic
    [ 2.0,  0.0, -2.0,  0.0,  0.058_793],
    [ 2.0, -1.0, -1.0,  0.0,  0.057_066],
    [ 2.0,  0.0,  1.0,  0.0,  0.053_322],
    [ 2.0, -1.0,  0.0,  0.0,  0.045_758],
    [ 0.0,  1.0, -1.0,  0.0, -0.040_923],
    [ 1.0,  0.0,  0.0,  0.0, -0.034_720],  // parallactic inequality
    [ 0.0,  1.0,  1.0,  0.0, -0.030_383],
    [ 2.0,  0.0,  0.0, -2.0,  0.015_327],
    [ 0.0,  0.0,  1.0,  2.0, -0.012_528],
    [ 0.0,  0.0,  1.0, -2.0,  0.010_980],
    [ 4.0,  0.0, -1.0,  0.0,  0.010_675],
    [ 0.0,  0.0,  3.0,  0.0,  0.010_034],
    [ 4.0,  0.0, -2.0,  0.0,  0.008_548],
];

/// Sum of the periodic terms in degrees.
fn periodic_sum_deg(args: &LunarArguments, t: f64) -> f64 {
    // Terms in M are scaled by the decreasing eccentricity of Earth's orbit.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum = 0.0_f64;
    for term in &TERMS {
        let angle = term[0] * args.elongation
            + term[1] * args.sun_anomaly
            + term[2] * args.moon_anomaly
            + term[3] * args.latitude_argument;
        let scale = match term[1].abs() as u8 {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += term[4] * scale * angle.to_radians().sin();
    }
    sum
}

/// Geocentric ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);
    normalize_degrees(args.mean_longitude + periodic_sum_deg(&args, t))
}
