//! Tabu Search configuration.

use crate::error::{AnnealError, Result};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(20)
///     .with_max_no_improve(100);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.tabu_tenure, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// How many recent move keys stay forbidden.
    pub tabu_tenure: usize,
    /// Whether a tabu move that yields a new global best is still allowed.
    pub aspiration: bool,
    /// Iterations without a new global best before stopping.
    pub max_no_improve: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_tenure: 7,
            aspiration: true,
            max_no_improve: 200,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (number of iterations a move remains tabu).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets maximum iterations without improvement.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. A tenure of 0 disables the tabu list.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(AnnealError::Configuration(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.max_no_improve == 0 {
            return Err(AnnealError::Configuration(
                "max_no_improve must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
