//! Tabu search and hill climbing over closed tours.

use rand::Rng;

use super::construct::InitialRoute;
use super::matrix::DistanceMatrix;
use super::moves::Neighborhood;
use super::solve::TourProblem;
use super::tour::{tour_length, Route};
use crate::climb::{ClimbConfig, ClimbResult, ClimbRunner};
use crate::error::Result;
use crate::tabu::{TabuConfig, TabuMove, TabuProblem, TabuResult, TabuRunner};

/// Randomness of the hybrid starting route used by [`tabu_search`].
pub const TABU_START_RANDOMNESS: f64 = 0.5;

/// The full neighborhood is evaluated every iteration. A move's key is the
/// visiting order it produces, so the tabu list forbids recently visited
/// routes.
impl TabuProblem for TourProblem<'_> {
    type Solution = Route;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Route {
        self.initial_route().build(self.matrix(), rng)
    }

    fn cost(&self, route: &Route) -> f64 {
        tour_length(route, self.matrix())
    }

    fn neighbors<R: Rng>(&self, route: &Route, _rng: &mut R) -> Vec<TabuMove<Route>> {
        let nb = self.neighborhood();
        nb.pairs(route.len())
            .into_iter()
            .map(|(i, j)| {
                let solution = nb.apply(route, i, j);
                TabuMove {
                    key: route_key(&solution),
                    cost: tour_length(&solution, self.matrix()),
                    solution,
                }
            })
            .collect()
    }
}

fn route_key(route: &[usize]) -> String {
    route
        .iter()
        .map(|loc| loc.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Tabu search over `matrix`, starting from a hybrid nearest-neighbor route
/// with [`TABU_START_RANDOMNESS`].
///
/// Use [`TabuRunner`] with a [`TourProblem`] directly for another start.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tabu::TabuConfig;
/// use tsp_anneal::tsp::{tabu_search, DistanceMatrix, Neighborhood};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// let config = TabuConfig::default().with_max_iterations(50).with_seed(5);
///
/// let result = tabu_search(&dm, Neighborhood::Reverse, &config).unwrap();
/// assert_eq!(result.best_cost, 14.0);
/// ```
pub fn tabu_search(
    matrix: &DistanceMatrix,
    neighborhood: Neighborhood,
    config: &TabuConfig,
) -> Result<TabuResult<Route>> {
    let problem = TourProblem::new(matrix, neighborhood)?.with_initial_route(InitialRoute::Hybrid {
        randomness: TABU_START_RANDOMNESS,
    })?;
    TabuRunner::run(&problem, config)
}

/// Multistart hill climbing over `matrix` from uniform random routes.
pub fn hill_climb(
    matrix: &DistanceMatrix,
    neighborhood: Neighborhood,
    config: &ClimbConfig,
) -> Result<ClimbResult<Route>> {
    let problem = TourProblem::new(matrix, neighborhood)?;
    ClimbRunner::run(&problem, config)
}
