//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with probability
//! `exp(-delta / T)`, where the temperature `T` shrinks geometrically
//! between blocks of iterations. A run ends when the temperature reaches
//! its floor or when too many consecutive candidates are rejected.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner, Termination};
pub use types::AnnealProblem;
