//! Simulated annealing for the symmetric Traveling Salesman Problem.
//!
//! - **Simulated Annealing (SA)**: a generic engine ([`sa::AnnealRunner`])
//!   with geometric cooling, Metropolis acceptance and stagnation-based
//!   early stopping, driven through the [`sa::AnnealProblem`] trait.
//! - **TSP**: distance matrix, cyclic tour evaluation, nearest-neighbor
//!   construction and the swap, relocate and reverse neighborhoods ([`tsp`]).
//! - **Baselines**: multistart hill climbing ([`climb`]) over the same
//!   problem trait, and Tabu Search ([`tabu`]).
//!
//! Each run is a pure function of its inputs and its random source. The
//! distance matrix is borrowed read-only, so independent runs can share it
//! across threads.
//!
//! # Examples
//!
//! ```
//! use tsp_anneal::sa::AnnealConfig;
//! use tsp_anneal::tsp::{solve, DistanceMatrix, Neighborhood};
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![2.0, 0.0, 6.0, 4.0],
//!     vec![9.0, 6.0, 0.0, 3.0],
//!     vec![10.0, 4.0, 3.0, 0.0],
//! ])?;
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(500.0)
//!     .with_cooling_factor(0.9)
//!     .with_iterations_per_temperature(50)
//!     .with_stagnation_limit(100)
//!     .with_seed(1);
//!
//! let result = solve(&dm, Neighborhood::Swap, &config)?;
//! assert_eq!(result.best.len(), 4);
//! assert!(result.best_cost <= result.cost_history[0]);
//! # Ok::<(), tsp_anneal::AnnealError>(())
//! ```

pub mod climb;
mod error;
pub mod sa;
pub mod tabu;
pub mod tsp;

pub use error::{AnnealError, Result};
