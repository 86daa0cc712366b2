//! Euclidean metric over fixed-dimension coordinates.

use num_traits::Float;

/// Computes the Euclidean distance between two coordinate arrays.
///
/// The dimension is fixed by the type so no length validation is needed.
/// Differences are scaled by the largest axis difference before squaring,
/// so the result stays finite whenever the true distance is representable.
///
/// # Examples
///
/// ```
/// use dencluster_core::euclidean_distance;
///
/// let distance = euclidean_distance(&[0.0_f64, 0.0], &[3.0, 4.0]);
/// assert!((distance - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn euclidean_distance<S: Float, const D: usize>(left: &[S; D], right: &[S; D]) -> S {
    let scale = left
        .iter()
        .zip(right)
        .fold(S::zero(), |widest, (&l, &r)| widest.max((l - r).abs()));
    if scale == S::zero() || !scale.is_finite() {
        return scale;
    }
    let sum = left.iter().zip(right).fold(S::zero(), |sum, (&l, &r)| {
        let ratio = (l - r) / scale;
        sum + ratio * ratio
    });
    scale * sum.sqrt()
}

/// Computes the squared Euclidean distance between two coordinate arrays.
///
/// The raw squares are summed, so the result overflows to infinity once an
/// axis difference exceeds the square root of the scalar's maximum (about
/// `1e154` for `f64`). Use [`euclidean_distance`] to rank or compare such
/// points.
#[must_use]
pub fn squared_euclidean_distance<S: Float, const D: usize>(left: &[S; D], right: &[S; D]) -> S {
    left.iter().zip(right).fold(S::zero(), |sum, (&l, &r)| {
        let diff = l - r;
        sum + diff * diff
    })
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare distances within a tolerance"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::same_point([1.0, 2.0, 3.0], [1.0, 2.0, 3.0], 0.0)]
    #[case::axis_aligned([0.0, 0.0, 0.0], [0.0, 0.0, 2.5], 2.5)]
    #[case::pythagorean([1.0, 1.0, 0.0], [4.0, 5.0, 0.0], 5.0)]
    fn euclidean_distance_matches_known_values(
        #[case] left: [f64; 3],
        #[case] right: [f64; 3],
        #[case] expected: f64,
    ) {
        let distance = euclidean_distance(&left, &right);
        assert!((distance - expected).abs() < 1e-12, "got {distance}");
    }

    #[test]
    fn euclidean_distance_is_symmetric_for_f32() {
        let a = [0.25_f32, -1.5];
        let b = [3.0_f32, 2.0];
        assert!((euclidean_distance(&a, &b) - euclidean_distance(&b, &a)).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_dimensional_points_coincide() {
        let empty: [f64; 0] = [];
        assert!(euclidean_distance(&empty, &empty).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_but_finite_separations_stay_finite() {
        let line = euclidean_distance(&[0.0_f64], &[1e200]);
        assert!((line / 1e200 - 1.0).abs() < 1e-12, "got {line}");

        let plane = euclidean_distance(&[1e200_f64, 0.0], &[-2e200, 4e200]);
        assert!((plane / 5e200 - 1.0).abs() < 1e-12, "got {plane}");
        assert!(squared_euclidean_distance(&[0.0_f64], &[1e200]).is_infinite());
    }

    #[test]
    fn squared_distance_skips_the_root() {
        let value = squared_euclidean_distance(&[0.0_f64, 0.0], &[3.0, 4.0]);
        assert!((value - 25.0).abs() < 1e-12);
    }
}
