//! Annealing over closed tours.

use rand::Rng;
use tracing::warn;

use super::construct::InitialRoute;
use super::matrix::DistanceMatrix;
use super::moves::Neighborhood;
use super::tour::{tour_length, Route};
use crate::error::Result;
use crate::sa::{AnnealConfig, AnnealProblem, AnnealResult, AnnealRunner};

/// Outcome of annealing a tour.
pub type TourResult = AnnealResult<Route>;

impl AnnealResult<Route> {
    /// Best route with locations numbered from 1.
    pub fn one_based_route(&self) -> Vec<usize> {
        self.best.iter().map(|&loc| loc + 1).collect()
    }
}

/// Symmetric TSP over a borrowed distance matrix.
///
/// The initial route comes from the configured [`InitialRoute`] (a uniform
/// random permutation by default); neighbors come from the configured
/// [`Neighborhood`].
#[derive(Debug, Clone, Copy)]
pub struct TourProblem<'a> {
    matrix: &'a DistanceMatrix,
    neighborhood: Neighborhood,
    initial: InitialRoute,
}

impl<'a> TourProblem<'a> {
    /// Wraps `matrix` after checking that every distance is finite and
    /// non-negative. Asymmetric matrices are accepted with a warning.
    pub fn new(matrix: &'a DistanceMatrix, neighborhood: Neighborhood) -> Result<Self> {
        matrix.check_distances()?;
        if !matrix.is_symmetric(1e-9) {
            warn!(
                size = matrix.size(),
                "distance matrix is not symmetric; tour lengths depend on direction"
            );
        }
        Ok(Self {
            matrix,
            neighborhood,
            initial: InitialRoute::default(),
        })
    }

    /// Replaces the starting-route construction after checking it against
    /// the matrix size.
    pub fn with_initial_route(mut self, initial: InitialRoute) -> Result<Self> {
        initial.validate(self.matrix.size())?;
        self.initial = initial;
        Ok(self)
    }

    /// Distance matrix the tours are measured on.
    pub fn matrix(&self) -> &DistanceMatrix {
        self.matrix
    }

    /// Move family used for neighbors.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// How the first route of a run is built.
    pub fn initial_route(&self) -> InitialRoute {
        self.initial
    }
}

impl AnnealProblem for TourProblem<'_> {
    type Solution = Route;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Route {
        self.initial.build(self.matrix, rng)
    }

    fn cost(&self, route: &Route) -> f64 {
        tour_length(route, self.matrix)
    }

    fn neighbor<R: Rng>(&self, route: &Route, rng: &mut R) -> Route {
        self.neighborhood.generate(route, rng)
    }
}

/// Anneals a tour over `matrix`, seeding from `config.seed`.
///
/// Configuration and matrix problems are reported before any search work.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealConfig;
/// use tsp_anneal::tsp::{solve, DistanceMatrix, Neighborhood};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_factor(0.9)
///     .with_iterations_per_temperature(10)
///     .with_stagnation_limit(20)
///     .with_seed(42);
///
/// let result = solve(&dm, Neighborhood::Reverse, &config).unwrap();
/// assert_eq!(result.best.len(), 4);
/// assert_eq!(result.best_cost, 14.0);
/// ```
pub fn solve(
    matrix: &DistanceMatrix,
    neighborhood: Neighborhood,
    config: &AnnealConfig,
) -> Result<TourResult> {
    let problem = TourProblem::new(matrix, neighborhood)?;
    AnnealRunner::run(&problem, config)
}

/// Like [`solve`], drawing every random decision from `rng`.
pub fn solve_with_rng<R: Rng>(
    matrix: &DistanceMatrix,
    neighborhood: Neighborhood,
    config: &AnnealConfig,
    rng: &mut R,
) -> Result<TourResult> {
    let problem = TourProblem::new(matrix, neighborhood)?;
    AnnealRunner::run_with_rng(&problem, config, rng)
}
