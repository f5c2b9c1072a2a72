//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}
