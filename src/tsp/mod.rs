//! Symmetric Traveling Salesman Problem.
//!
//! A tour visits every location of a [`DistanceMatrix`] exactly once and
//! returns to its start. [`solve`] anneals a visiting order using one of the
//! [`Neighborhood`] move families: pairwise swap, relocation of a single
//! location, or segment reversal.
//!
//! The same problem also drives [`tabu_search`] and [`hill_climb`], and
//! [`nearest_neighbor_sweep`] gives a constructive baseline.

mod construct;
mod matrix;
mod moves;
mod search;
mod solve;
mod tour;

pub use construct::{
    hybrid_route, nearest_neighbor_route, nearest_neighbor_sweep, InitialRoute,
    NearestNeighborSweep,
};
pub use matrix::DistanceMatrix;
pub use moves::Neighborhood;
pub use search::{hill_climb, tabu_search, TABU_START_RANDOMNESS};
pub use solve::{solve, solve_with_rng, TourProblem, TourResult};
pub use tour::{checked_tour_length, is_permutation, tour_length, Route};
