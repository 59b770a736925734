//! Circular (vector) mean of angles

use crate::math::normalize_angle;
use nalgebra::Vector2;

/// Resultant lengths below this are treated as a cancelled vector sum
///
/// Large inputs raise the cutoff, see [`circular_mean`].
pub const DEGENERATE_RESULTANT_LENGTH: f64 = 1e-12;

/// Calculate the circular mean of a set of angles
///
/// Each angle is mapped to its unit vector `(cos θ, sin θ)`, the vectors are
/// averaged and the mean vector is converted back to an angle with `atan2`.
/// This keeps angles on either side of the 0/2π wraparound together, where
/// an arithmetic mean would land on the opposite side of the circle.
///
/// The vectors count as cancelled when their mean length is below
/// [`DEGENERATE_RESULTANT_LENGTH`] or below `4ε·max|θ|`, whichever is larger.
/// An angle of magnitude `|θ|` only carries about `ε·|θ|` of absolute
/// precision, so `[θ, θ + π]` leaves a residue of that size after rounding.
///
/// # Arguments
/// * `angles` - Angles in radians, any range
///
/// # Returns
/// Mean direction in radians within `[0, 2π)`, or NaN when the input is
/// empty, the unit vectors cancel out, or an input is not finite.
///
/// # Example
/// ```
/// use heading_mean::circular_mean;
/// use std::f64::consts::TAU;
///
/// let mean = circular_mean(&[TAU - 0.01, 0.01]);
/// assert!(mean < 1e-9 || TAU - mean < 1e-9);
///
/// assert!(circular_mean(&[]).is_nan());
/// ```
pub fn circular_mean(angles: &[f64]) -> f64 {
    circular_mean_of(angles.iter().copied())
}

/// Circular mean over any sequence of angles, same rules as [`circular_mean`]
pub(crate) fn circular_mean_of(angles: impl IntoIterator<Item = f64>) -> f64 {
    let Some(resultant) = Resultant::from_angles(angles) else {
        return f64::NAN;
    };

    if resultant.is_cancelled() {
        return f64::NAN;
    }

    normalize_angle(resultant.mean.y.atan2(resultant.mean.x))
}

/// Calculate the mean resultant length of a set of angles
///
/// Magnitude of the averaged unit vector: 1 when every angle points the same
/// way, close to 0 when they are spread evenly around the circle.
///
/// # Returns
/// Value in `[0, 1]`, or NaN for empty input.
pub fn mean_resultant_length(angles: &[f64]) -> f64 {
    Resultant::from_angles(angles.iter().copied()).map_or(f64::NAN, |r| r.mean.magnitude())
}

/// Averaged unit vector of a set of angles
struct Resultant {
    mean: Vector2<f64>,
    /// Largest input magnitude, bounds the rounding error of the inputs
    largest_angle: f64,
}

impl Resultant {
    /// `None` for empty input
    fn from_angles(angles: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sum: Vector2<f64> = Vector2::zeros();
        let mut count = 0usize;
        let mut largest_angle: f64 = 0.0;

        for angle in angles {
            sum += Vector2::new(angle.cos(), angle.sin());
            count += 1;
            largest_angle = largest_angle.max(angle.abs());
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            mean: sum / count as f64,
            largest_angle,
        })
    }

    fn is_cancelled(&self) -> bool {
        let tolerance = DEGENERATE_RESULTANT_LENGTH.max(4.0 * f64::EPSILON * self.largest_angle);
        self.mean.magnitude() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPSILON: f64 = 1e-9;

    /// Smallest distance between two directions
    fn angular_distance(a: f64, b: f64) -> f64 {
        let diff = normalize_angle(a - b);
        diff.min(TAU - diff)
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(circular_mean(&[]).is_nan());
        assert!(mean_resultant_length(&[]).is_nan());
    }

    #[test]
    fn test_single_angle() {
        assert!((circular_mean(&[1.0]) - 1.0).abs() < EPSILON);
        assert!((circular_mean(&[-FRAC_PI_2]) - 1.5 * PI).abs() < EPSILON);
        assert!((mean_resultant_length(&[2.5]) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_wraparound() {
        let mean = circular_mean(&[TAU - 0.01, 0.01]);
        assert!(
            angular_distance(mean, 0.0) < EPSILON,
            "Mean across north should be ~0, got {}",
            mean
        );
        assert!(angular_distance(mean, PI) > 3.0);
    }

    #[test]
    fn test_quarter_angles() {
        let mean = circular_mean(&[0.0, FRAC_PI_2]);
        assert!((mean - PI / 4.0).abs() < EPSILON);

        let mean = circular_mean(&[PI, 1.5 * PI]);
        assert!((mean - 1.25 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_opposite_angles_cancel() {
        assert!(circular_mean(&[0.0, PI]).is_nan());
        assert!(circular_mean(&[1.0, 1.0 + PI]).is_nan());
        assert!(circular_mean(&[0.0, TAU / 3.0, 2.0 * TAU / 3.0]).is_nan());
        assert!(mean_resultant_length(&[0.0, PI]) < DEGENERATE_RESULTANT_LENGTH);
    }

    #[test]
    fn test_opposite_large_angles_cancel() {
        for theta in [1e3, 1e5, -1e5, 1e6, 3.7e8] {
            let mean = circular_mean(&[theta, theta + PI]);
            assert!(mean.is_nan(), "[{}, {} + π] should cancel, got {}", theta, theta, mean);
        }
    }

    #[test]
    fn test_large_angles_still_average() {
        let theta = 1e6;
        let mean = circular_mean(&[theta - 0.1, theta + 0.1]);
        assert!(angular_distance(mean, theta) < 1e-6);
    }

    #[test]
    fn test_iterator_core_matches_slice() {
        let angles = [0.2, 6.1, 3.3, -1.0];
        assert_eq!(circular_mean_of(angles.iter().copied()), circular_mean(&angles));
        assert!(circular_mean_of(core::iter::empty::<f64>()).is_nan());
    }

    #[test]
    fn test_non_finite_input() {
        assert!(circular_mean(&[0.5, f64::NAN]).is_nan());
        assert!(circular_mean(&[f64::INFINITY]).is_nan());
    }

    #[test]
    fn test_input_is_not_modified() {
        let angles = [7.0, -3.0, 0.25];
        let copy = angles;
        let _ = circular_mean(&angles);
        assert_eq!(angles, copy);
    }

    #[test]
    fn test_unnormalized_inputs() {
        // Same directions given with extra turns
        let base = circular_mean(&[0.3, 0.5]);
        let shifted = circular_mean(&[0.3 + 2.0 * TAU, 0.5 - 3.0 * TAU]);
        assert!(angular_distance(base, shifted) < EPSILON);
    }
}
