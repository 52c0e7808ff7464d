//! Multistart hill climbing.
//!
//! Annealing at zero temperature: only strictly improving candidates are
//! accepted, and the climb restarts from a fresh initial solution once it
//! stops improving. Problems are described with the same
//! [`AnnealProblem`](crate::sa::AnnealProblem) trait the annealer uses.

mod config;
mod runner;

pub use config::ClimbConfig;
pub use runner::{ClimbResult, ClimbRunner};
