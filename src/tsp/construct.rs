//! Constructive starting routes.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//! for the Traveling Salesman Problem", *SIAM J. Computing* 6(3), 563-581.

use rand::Rng;
use u_numflow::random::shuffle;

use super::matrix::DistanceMatrix;
use super::tour::{tour_length, Route};
use crate::error::{AnnealError, Result};

/// How a search builds its first route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialRoute {
    /// Uniform random permutation.
    #[default]
    Random,
    /// Greedy nearest-neighbor tour from a fixed start location.
    NearestNeighbor {
        /// Location the tour starts from.
        start: usize,
    },
    /// Nearest-neighbor tour from a random start where each step instead
    /// picks a uniformly random unvisited location with probability
    /// `randomness`.
    Hybrid {
        /// Probability in [0, 1] of a random step.
        randomness: f64,
    },
}

impl InitialRoute {
    /// Checks the variant's parameters against an `n`-location matrix.
    pub fn validate(&self, n: usize) -> Result<()> {
        match *self {
            Self::Random => Ok(()),
            Self::NearestNeighbor { start } if start >= n => Err(AnnealError::Configuration(
                format!("nearest-neighbor start {start} out of range for {n} locations"),
            )),
            Self::NearestNeighbor { .. } => Ok(()),
            Self::Hybrid { randomness } if !(0.0..=1.0).contains(&randomness) => {
                Err(AnnealError::Configuration(format!(
                    "hybrid randomness must be in [0, 1], got {randomness}"
                )))
            }
            Self::Hybrid { .. } => Ok(()),
        }
    }

    /// Builds a route over every location of `matrix`.
    ///
    /// # Panics
    ///
    /// Panics if a `NearestNeighbor` start is out of range; see [`validate`](Self::validate).
    pub fn build<R: Rng>(&self, matrix: &DistanceMatrix, rng: &mut R) -> Route {
        match *self {
            Self::Random => {
                let mut route: Route = (0..matrix.size()).collect();
                shuffle(&mut route, rng);
                route
            }
            Self::NearestNeighbor { start } => nearest_neighbor_route(matrix, start),
            Self::Hybrid { randomness } => hybrid_route(matrix, randomness, rng),
        }
    }
}

/// Greedy tour: from `start`, repeatedly move to the closest unvisited
/// location. Ties go to the lowest index.
///
/// # Panics
///
/// Panics if `start >= matrix.size()`.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tsp::{nearest_neighbor_route, DistanceMatrix};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 5.0, 1.0],
///     vec![5.0, 0.0, 2.0],
///     vec![1.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(nearest_neighbor_route(&dm, 0), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor_route(matrix: &DistanceMatrix, start: usize) -> Route {
    let n = matrix.size();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    route.push(current);

    while route.len() < n {
        let next = closest_unvisited(matrix.row(current), &visited);
        visited[next] = true;
        route.push(next);
        current = next;
    }
    route
}

/// Nearest-neighbor tour where each step is replaced, with probability
/// `randomness`, by a uniformly random unvisited location. The start is
/// uniform at random.
///
/// `randomness == 0.0` is a nearest-neighbor tour from a random start;
/// `randomness == 1.0` is a uniform random permutation.
pub fn hybrid_route<R: Rng>(matrix: &DistanceMatrix, randomness: f64, rng: &mut R) -> Route {
    let n = matrix.size();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = rng.random_range(0..n);
    visited[current] = true;
    route.push(current);

    while route.len() < n {
        let next = if rng.random_range(0.0..1.0) < randomness {
            let remaining = n - route.len();
            let pick = rng.random_range(0..remaining);
            visited
                .iter()
                .enumerate()
                .filter(|(_, &seen)| !seen)
                .nth(pick)
                .map(|(loc, _)| loc)
                .unwrap_or_else(|| closest_unvisited(matrix.row(current), &visited))
        } else {
            closest_unvisited(matrix.row(current), &visited)
        };
        visited[next] = true;
        route.push(next);
        current = next;
    }
    route
}

fn closest_unvisited(row: &[f64], visited: &[bool]) -> usize {
    let mut best = usize::MAX;
    let mut best_distance = f64::INFINITY;
    for (loc, &d) in row.iter().enumerate() {
        if !visited[loc] && (best == usize::MAX || d < best_distance) {
            best = loc;
            best_distance = d;
        }
    }
    best
}

/// Nearest-neighbor tours from every start location.
#[derive(Debug, Clone)]
pub struct NearestNeighborSweep {
    /// Shortest of the constructed tours (first start on ties).
    pub best_route: Route,
    /// Length of `best_route`.
    pub best_length: f64,
    /// Mean length over all starts.
    pub mean_length: f64,
    /// Tour length per start location, indexed by start.
    pub lengths: Vec<f64>,
}

/// Builds a nearest-neighbor tour from every location and keeps the shortest.
pub fn nearest_neighbor_sweep(matrix: &DistanceMatrix) -> NearestNeighborSweep {
    let n = matrix.size();
    let mut best_route = Vec::new();
    let mut best_length = f64::INFINITY;
    let mut lengths = Vec::with_capacity(n);

    for start in 0..n {
        let route = nearest_neighbor_route(matrix, start);
        let length = tour_length(&route, matrix);
        if length < best_length {
            best_length = length;
            best_route = route;
        }
        lengths.push(length);
    }

    let mean_length = lengths.iter().sum::<f64>() / n as f64;
    NearestNeighborSweep {
        best_route,
        best_length,
        mean_length,
        lengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::is_permutation;
    use u_numflow::random::create_rng;

    /// Locations on a line at 0, 1, 3, 7, 15.
    fn line() -> DistanceMatrix {
        let xs = [0.0f64, 1.0, 3.0, 7.0, 15.0];
        let data = xs
            .iter()
            .flat_map(|&a| xs.iter().map(move |&b| (a - b).abs()))
            .collect();
        DistanceMatrix::from_data(xs.len(), data).unwrap()
    }

    #[test]
    fn test_nearest_neighbor_from_each_end() {
        let dm = line();
        assert_eq!(nearest_neighbor_route(&dm, 0), vec![0, 1, 2, 3, 4]);
        assert_eq!(nearest_neighbor_route(&dm, 4), vec![4, 3, 2, 1, 0]);
        // From 2 (x=3): 1 (x=1, d=2), then 0, then 3, then 4.
        assert_eq!(nearest_neighbor_route(&dm, 2), vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn test_nearest_neighbor_ties_take_lowest_index() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0])
            .unwrap();
        assert_eq!(nearest_neighbor_route(&dm, 1), vec![1, 0, 2]);
    }

    #[test]
    fn test_sweep_covers_every_start() {
        let dm = line();
        let sweep = nearest_neighbor_sweep(&dm);

        assert_eq!(sweep.lengths.len(), 5);
        // Every tour on a line visits both ends: length 2 * 15.
        for &len in &sweep.lengths {
            assert!((len - 30.0).abs() < 1e-12);
        }
        assert_eq!(sweep.best_route, vec![0, 1, 2, 3, 4]);
        assert!((sweep.best_length - 30.0).abs() < 1e-12);
        assert!((sweep.mean_length - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_picks_shortest_start() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0, 10.0],
            vec![1.0, 0.0, 1.0, 9.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![10.0, 9.0, 1.0, 0.0],
        ])
        .unwrap();
        let sweep = nearest_neighbor_sweep(&dm);
        for (start, &len) in sweep.lengths.iter().enumerate() {
            assert_eq!(len, tour_length(&nearest_neighbor_route(&dm, start), &dm));
        }
        let min = sweep.lengths.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(sweep.best_length, min);
        assert_eq!(tour_length(&sweep.best_route, &dm), sweep.best_length);
        let mean = sweep.lengths.iter().sum::<f64>() / 4.0;
        assert!((sweep.mean_length - mean).abs() < 1e-12);
    }

    #[test]
    fn test_hybrid_extremes() {
        let dm = line();
        let mut rng = create_rng(9);
        for _ in 0..20 {
            let greedy = hybrid_route(&dm, 0.0, &mut rng);
            assert_eq!(greedy, nearest_neighbor_route(&dm, greedy[0]));

            let random = hybrid_route(&dm, 1.0, &mut rng);
            assert!(is_permutation(&random, 5));
        }
    }

    #[test]
    fn test_initial_route_variants() {
        let dm = line();
        let mut rng = create_rng(4);
        for initial in [
            InitialRoute::Random,
            InitialRoute::NearestNeighbor { start: 3 },
            InitialRoute::Hybrid { randomness: 0.5 },
        ] {
            assert!(initial.validate(5).is_ok());
            let route = initial.build(&dm, &mut rng);
            assert!(is_permutation(&route, 5), "{initial:?}");
        }
        assert_eq!(
            InitialRoute::NearestNeighbor { start: 3 }.build(&dm, &mut rng),
            vec![3, 2, 1, 0, 4]
        );
    }

    #[test]
    fn test_initial_route_validation() {
        assert!(matches!(
            InitialRoute::NearestNeighbor { start: 5 }.validate(5),
            Err(AnnealError::Configuration(_))
        ));
        assert!(InitialRoute::Hybrid { randomness: 1.5 }.validate(5).is_err());
        assert!(InitialRoute::Hybrid { randomness: f64::NAN }.validate(5).is_err());
    }
}
