//! Cyclic tour length.

use super::matrix::DistanceMatrix;
use crate::error::{AnnealError, Result};

/// A visiting order: a permutation of `0..n`.
pub type Route = Vec<usize>;

/// Total length of the closed tour visiting `route` in order.
///
/// Sums consecutive legs and the closing leg from the last location back
/// to the first. Routes with fewer than two locations have length 0.
///
/// # Panics
///
/// Panics if an index in `route` is out of bounds for `matrix`.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tsp::{tour_length, DistanceMatrix};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 4.0],
///     vec![2.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(tour_length(&[0, 1, 2], &dm), 7.0);
/// ```
pub fn tour_length(route: &[usize], matrix: &DistanceMatrix) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }
    let legs: f64 = route.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    legs + matrix.get(route[route.len() - 1], route[0])
}

/// Like [`tour_length`], but reports bad input instead of panicking or
/// returning a meaningless value.
///
/// - out-of-range location: [`AnnealError::DegenerateInput`]
/// - negative or non-finite leg: [`AnnealError::NumericAnomaly`]
pub fn checked_tour_length(route: &[usize], matrix: &DistanceMatrix) -> Result<f64> {
    let n = matrix.size();
    if let Some(&bad) = route.iter().find(|&&loc| loc >= n) {
        return Err(AnnealError::DegenerateInput(format!(
            "location {bad} out of range for {n} locations"
        )));
    }
    if route.len() < 2 {
        return Ok(0.0);
    }

    let closing = (route[route.len() - 1], route[0]);
    let mut length = 0.0;
    for (from, to) in route.windows(2).map(|w| (w[0], w[1])).chain(std::iter::once(closing)) {
        let d = matrix.get(from, to);
        if !(d.is_finite() && d >= 0.0) {
            return Err(AnnealError::NumericAnomaly { from, to, value: d });
        }
        length += d;
    }
    Ok(length)
}

/// Returns `true` if `route` visits every location in `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &loc in route {
        if loc >= n || seen[loc] {
            return false;
        }
        seen[loc] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> DistanceMatrix {
        // Unit square corners 0..4 in order; diagonals sqrt(2).
        let s = 2f64.sqrt();
        DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, s, 1.0],
            vec![1.0, 0.0, 1.0, s],
            vec![s, 1.0, 0.0, 1.0],
            vec![1.0, s, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_perimeter() {
        assert!((tour_length(&[0, 1, 2, 3], &square()) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_includes_closing_leg() {
        let s = 2f64.sqrt();
        let len = tour_length(&[0, 2, 1, 3], &square());
        assert!((len - (2.0 * s + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_and_reflection_invariant() {
        let dm = square();
        let base = tour_length(&[0, 2, 1, 3], &dm);
        assert!((tour_length(&[2, 1, 3, 0], &dm) - base).abs() < 1e-12);
        assert!((tour_length(&[3, 1, 2, 0], &dm) - base).abs() < 1e-12);
    }

    #[test]
    fn test_trivial_routes() {
        let dm = square();
        assert_eq!(tour_length(&[], &dm), 0.0);
        assert_eq!(tour_length(&[2], &dm), 0.0);
        assert_eq!(checked_tour_length(&[2], &dm), Ok(0.0));
    }

    #[test]
    fn test_checked_matches_plain() {
        let dm = square();
        let route = [3, 0, 2, 1];
        assert_eq!(checked_tour_length(&route, &dm), Ok(tour_length(&route, &dm)));
    }

    #[test]
    fn test_checked_reports_negative_leg() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, -3.0],
            vec![1.0, -3.0, 0.0],
        ])
        .unwrap();
        assert_eq!(
            checked_tour_length(&[0, 1, 2], &dm),
            Err(AnnealError::NumericAnomaly {
                from: 1,
                to: 2,
                value: -3.0
            })
        );
    }

    #[test]
    fn test_checked_reports_out_of_range() {
        let err = checked_tour_length(&[0, 9], &square()).unwrap_err();
        assert!(matches!(err, AnnealError::DegenerateInput(_)));
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[2, 0, 0], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }

    fn matrix_and_route() -> impl Strategy<Value = (DistanceMatrix, Vec<usize>)> {
        (2usize..12).prop_flat_map(|n| {
            (
                prop::collection::vec(0.0f64..1e6, n * n),
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            )
                .prop_map(move |(data, route)| {
                    (DistanceMatrix::from_data(n, data).unwrap(), route)
                })
        })
    }

    proptest! {
        #[test]
        fn prop_length_non_negative((dm, route) in matrix_and_route()) {
            let len = tour_length(&route, &dm);
            prop_assert!(len >= 0.0);
            prop_assert_eq!(checked_tour_length(&route, &dm), Ok(len));
        }
    }
}
