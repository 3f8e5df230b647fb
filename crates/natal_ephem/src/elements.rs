//! Mean orbital elements of the planets.
//!
//! Values and rates from Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL, Table 1, valid 1800–2050), referred
//! to the mean ecliptic and equinox of J2000. The semi-major axis is held
//! constant; every other element is linear in Julian centuries.
//!
//! Earth uses the Earth–Moon barycenter row.

use natal_time::normalize_degrees;

use crate::body::Body;

/// A quantity linear in Julian centuries since J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub at_j2000: f64,
    pub per_century: f64,
}

impl Linear {
    pub const fn new(at_j2000: f64, per_century: f64) -> Self {
        Self {
            at_j2000,
            per_century,
        }
    }

    /// Value at `t` Julian centuries since J2000.0.
    pub fn eval(self, t: f64) -> f64 {
        self.at_j2000 + self.per_century * t
    }
}

/// Mean elements of one orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// a, AU.
    pub semi_major_axis_au: f64,
    /// e.
    pub eccentricity: Linear,
    /// i, degrees.
    pub inclination_deg: Linear,
    /// L, degrees.
    pub mean_longitude_deg: Linear,
    /// ϖ, degrees.
    pub perihelion_deg: Linear,
    /// Ω, degrees.
    pub node_deg: Linear,
}

/// Elements evaluated at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAt {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub perihelion_deg: f64,
    pub node_deg: f64,
}

impl ElementsAt {
    /// M = L − ϖ, degrees in [0, 360).
    pub fn mean_anomaly_deg(&self) -> f64 {
        normalize_degrees(self.mean_longitude_deg - self.perihelion_deg)
    }

    /// w = ϖ − Ω, degrees in [0, 360).
    pub fn argument_of_perihelion_deg(&self) -> f64 {
        normalize_degrees(self.perihelion_deg - self.node_deg)
    }
}

impl OrbitalElements {
    /// Evaluate every element at `t` Julian centuries since J2000.0.
    pub fn at(&self, t: f64) -> ElementsAt {
        ElementsAt {
            semi_major_axis_au: self.semi_major_axis_au,
            eccentricity: self.eccentricity.eval(t),
            inclination_deg: self.inclination_deg.eval(t),
            mean_longitude_deg: self.mean_longitude_deg.eval(t),
            perihelion_deg: self.perihelion_deg.eval(t),
            node_deg: self.node_deg.eval(t),
        }
    }
}

#[rustfmt::skip]
pub const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 0.387_099_27,
    eccentricity:       Linear::new(0.205_635_93,      0.000_019_06),
    inclination_deg:    Linear::new(7.004_979_02,     -0.005_947_49),
    mean_longitude_deg: Linear::new(252.250_323_50, 149_472.674_111_75),
    perihelion_deg:     Linear::new(77.457_796_28,     0.160_476_89),
    node_deg:           Linear::new(48.330_765_93,    -0.125_340_81),
};

#[rustfmt::skip]
pub const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 0.723_335_66,
    eccentricity:       Linear::new(0.006_776_72,     -0.000_041_07),
    inclination_deg:    Linear::new(3.394_676_05,     -0.000_788_90),
    mean_longitude_deg: Linear::new(181.979_099_50,  58_517.815_387_29),
    perihelion_deg:     Linear::new(131.602_467_18,    0.002_683_29),
    node_deg:           Linear::new(76.679_842_55,    -0.277_694_18),
};

#[rustfmt::skip]
pub const EARTH: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 1.000_002_61,
    eccentricity:       Linear::new(0.016_711_23,     -0.000_043_92),
    inclination_deg:    Linear::new(-0.000_015_31,    -0.012_946_68),
    mean_longitude_deg: Linear::new(100.464_571_66,  35_999.372_449_81),
    perihelion_deg:     Linear::new(102.937_681_93,    0.323_273_64),
    node_deg:           Linear::new(0.0,               0.0),
};

#[rustfmt::skip]
pub const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 1.523_710_34,
    eccentricity:       Linear::new(0.093_394_10,      0.000_078_82),
    inclination_deg:    Linear::new(1.849_691_42,     -0.008_131_31),
    mean_longitude_deg: Linear::new(-4.553_432_05,   19_140.302_684_99),
    perihelion_deg:     Linear::new(-23.943_629_59,    0.444_410_88),
    node_deg:           Linear::new(49.559_538_91,    -0.292_573_43),
};

#[rustfmt::skip]
pub const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 5.202_887_00,
    eccentricity:       Linear::new(0.048_386_24,     -0.000_132_53),
    inclination_deg:    Linear::new(1.304_396_95,     -0.001_837_14),
    mean_longitude_deg: Linear::new(34.396_440_51,    3_034.746_127_75),
    perihelion_deg:     Linear::new(14.728_479_83,     0.212_526_68),
    node_deg:           Linear::new(100.473_909_09,    0.204_691_06),
};

#[rustfmt::skip]
pub const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 9.536_675_94,
    eccentricity:       Linear::new(0.053_861_79,     -0.000_509_91),
    inclination_deg:    Linear::new(2.485_991_87,      0.001_936_09),
    mean_longitude_deg: Linear::new(49.954_244_23,    1_222.493_622_01),
    perihelion_deg:     Linear::new(92.598_878_31,    -0.418_972_16),
    node_deg:           Linear::new(113.662_424_48,   -0.288_677_94),
};

#[rustfmt::skip]
pub const URANUS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 19.189_164_64,
    eccentricity:       Linear::new(0.047_257_44,     -0.000_043_97),
    inclination_deg:    Linear::new(0.772_637_83,     -0.002_429_39),
    mean_longitude_deg: Linear::new(313.238_104_51,     428.482_027_85),
    perihelion_deg:     Linear::new(170.954_276_30,     0.408_052_81),
    node_deg:           Linear::new(74.016_925_03,      0.042_405_89),
};

#[rustfmt::skip]
pub const NEPTUNE: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 30.069_922_76,
    eccentricity:       Linear::new(0.008_590_48,      0.000_051_05),
    inclination_deg:    Linear::new(1.770_043_47,      0.000_353_72),
    mean_longitude_deg: Linear::new(-55.120_029_69,     218.459_453_25),
    perihelion_deg:     Linear::new(44.964_762_27,     -0.322_414_64),
    node_deg:           Linear::new(131.784_225_74,    -0.005_086_64),
};

#[rustfmt::skip]
pub const PLUTO: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 39.482_116_75,
    eccentricity:       Linear::new(0.248_827_30,      0.000_051_70),
    inclination_deg:    Linear::new(17.140_012_06,     0.000_048_18),
    mean_longitude_deg: Linear::new(238.929_038_33,     145.207_805_15),
    perihelion_deg:     Linear::new(224.068_916_29,    -0.040_629_42),
    node_deg:           Linear::new(110.303_936_84,    -0.011_834_82),
};

/// Mean elements of a planet. `None` for the Sun and Moon.
pub const fn elements_of(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon => None,
    }
}
