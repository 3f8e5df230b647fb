//! Zodiac sign and degree-in-sign mapping.
//!
//! The ecliptic is divided into twelve 30° signs starting from Aries at
//! the March equinox. Sign index and in-sign degree are taken from the same
//! exact remainder, so a longitude on or next to a cusp lands in exactly
//! one sign.

use natal_time::normalize_degrees;
use serde::{Deserialize, Serialize};

/// The twelve tropical signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..=30 within a sign, 0..=360 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds in tenths, [0.0, 59.9].
    pub seconds: f64,
}

const TENTHS_PER_MINUTE: u64 = 600;
const TENTHS_PER_DEGREE: u64 = 60 * TENTHS_PER_MINUTE;

/// Convert decimal degrees to DMS. Negative input uses the absolute value.
///
/// The angle is rounded to a tenth of an arc-second first, so a value just
/// below a whole minute carries into the minutes and degrees instead of
/// showing 60 seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let tenths = (deg.abs() * TENTHS_PER_DEGREE as f64).round() as u64;
    Dms {
        degrees: (tenths / TENTHS_PER_DEGREE) as u16,
        minutes: ((tenths % TENTHS_PER_DEGREE) / TENTHS_PER_MINUTE) as u8,
        seconds: (tenths % TENTHS_PER_MINUTE) as f64 / 10.0,
    }
}

/// Sign placement of one longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    pub sign: Sign,
    /// 0-based sign index.
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
}

/// Sign and in-sign degree for an ecliptic longitude (any real input).
pub fn sign_from_longitude(longitude_deg: f64) -> SignInfo {
    let lon = normalize_degrees(longitude_deg);
    let degree_in_sign = lon % 30.0;
    // lon − degree_in_sign is an exact multiple of 30
    let sign_index = (((lon - degree_in_sign) / 30.0).round() as u8).min(11);
    SignInfo {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        degree_in_sign,
        dms: deg_to_dms(degree_in_sign),
    }
}
