//! Error types for annealing runs.

use thiserror::Error;

/// Errors raised before or during an annealing run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnealError {
    /// Invalid run parameters (temperature, cooling factor, limits).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input too small or malformed to define a tour.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A distance that would make tour lengths meaningless.
    #[error("numeric anomaly: distance {value} from location {from} to location {to}")]
    NumericAnomaly {
        /// Row index of the offending entry.
        from: usize,
        /// Column index of the offending entry.
        to: usize,
        /// The offending value (negative or non-finite).
        value: f64,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AnnealError>;
