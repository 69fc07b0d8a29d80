//! Angle arithmetic shared by every calculation service.

/// Normalize an angle to the [0, 360) range.
pub fn normalize_360(angle: f64) -> f64 {
    let result = angle % 360.0;
    if result < 0.0 {
        result + 360.0
    } else {
        result
    }
}

/// Signed minimal angular difference from `a` to `b`, in (-180, 180].
pub fn minimal_angle_difference(a: f64, b: f64) -> f64 {
    let mut diff = b - a;
    while diff > 180.0 {
        diff -= 360.0;
    }
    while diff < -180.0 {
        diff += 360.0;
    }
    diff
}

/// Quadrant-correct arctangent, converted to a bearing in [0, 360) degrees.
///
/// This is the only correct way to recover a longitude from Cartesian
/// components; a naive `atan` loses the quadrant.
pub fn atan2_degrees(y: f64, x: f64) -> f64 {
    normalize_360(y.atan2(x).to_degrees())
}
