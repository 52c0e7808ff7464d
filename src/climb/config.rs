//! Hill-climbing configuration.

use crate::error::{AnnealError, Result};

/// Configuration for multistart hill climbing.
///
/// Each restart climbs from a fresh initial solution until either
/// `max_iterations` candidates have been evaluated or `max_no_improve`
/// consecutive candidates failed to improve.
///
/// # Examples
///
/// ```
/// use tsp_anneal::climb::ClimbConfig;
///
/// let config = ClimbConfig::default()
///     .with_restarts(50)
///     .with_max_iterations(5000)
///     .with_max_no_improve(2500)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Number of independent climbs.
    pub restarts: usize,
    /// Candidate evaluations per climb.
    pub max_iterations: usize,
    /// Consecutive non-improving candidates that end a climb.
    pub max_no_improve: usize,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            restarts: 20,
            max_iterations: 1000,
            max_no_improve: 500,
            seed: None,
        }
    }
}

impl ClimbConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. Every budget must be at least 1.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("restarts", self.restarts),
            ("max_iterations", self.max_iterations),
            ("max_no_improve", self.max_no_improve),
        ] {
            if value == 0 {
                return Err(AnnealError::Configuration(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        Ok(())
    }
}
