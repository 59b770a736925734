//! Angle unit conversions and normalization

use core::f64::consts::{PI, TAU};

/// Mathematical constants
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Convert an angle from degrees to radians
///
/// # Example
/// ```
/// use heading_mean::degrees_to_radians;
///
/// let rad = degrees_to_radians(180.0);
/// assert!((rad - std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Convert an angle from radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Wrap an angle in radians into the half-open range `[0, 2π)`
///
/// NaN and infinite inputs return NaN.
///
/// # Example
/// ```
/// use heading_mean::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-12);
/// ```
pub fn normalize_angle(radians: f64) -> f64 {
    if !radians.is_finite() {
        return f64::NAN;
    }

    let mut wrapped = radians % TAU;
    if wrapped < 0.0 {
        wrapped += TAU;
    }

    // -tiny + 2π rounds to exactly 2π
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-12);
        assert_eq!(degrees_to_radians(0.0), 0.0);

        let degrees = 123.456;
        let recovered = radians_to_degrees(degrees_to_radians(degrees));
        assert!((recovered - degrees).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_angle_range() {
        for step in -40..40 {
            let angle = step as f64 * 0.7;
            let normalized = normalize_angle(angle);
            assert!(
                (0.0..TAU).contains(&normalized),
                "{} normalized to {} outside [0, 2π)",
                angle,
                normalized
            );
            // Same direction before and after
            assert!((normalized.cos() - angle.cos()).abs() < 1e-9);
            assert!((normalized.sin() - angle.sin()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalize_angle_boundaries() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert_eq!(normalize_angle(-1e-18), 0.0);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_non_finite() {
        assert!(normalize_angle(f64::NAN).is_nan());
        assert!(normalize_angle(f64::INFINITY).is_nan());
        assert!(normalize_angle(f64::NEG_INFINITY).is_nan());
    }
}
