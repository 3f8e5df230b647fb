//! Angle normalization.
//!
//! Every longitude produced anywhere in the workspace passes through
//! [`normalize_degrees`] before it is compared, mapped to a sign or returned.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that
/// value is folded back to 0.0 so the half-open range always holds.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `a - b` folded into (-180, 180] degrees.
pub fn signed_separation_deg(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}
