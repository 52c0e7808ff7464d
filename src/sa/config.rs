//! SA configuration.

use crate::error::{AnnealError, Result};

/// Configuration for a single annealing run.
///
/// Cooling is geometric: after every block of `iterations_per_temperature`
/// candidate evaluations the temperature is multiplied by `cooling_factor`.
/// The run continues while the temperature stays above `min_temperature`,
/// or until `stagnation_limit` consecutive candidates have been rejected.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_factor(0.95)
///     .with_iterations_per_temperature(100)
///     .with_stagnation_limit(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature `T0`. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Levels run while the temperature is strictly above this value.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Candidate evaluations per temperature level.
    pub iterations_per_temperature: usize,

    /// Consecutive rejections that end the run early.
    ///
    /// The counter is reset by any accepted move and is carried across
    /// temperature levels.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1.0,
            cooling_factor: 0.95,
            iterations_per_temperature: 100,
            stagnation_limit: 100,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// An initial temperature at or below `min_temperature` is valid: the run
    /// then evaluates only the initial solution.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(AnnealError::Configuration(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(AnnealError::Configuration(format!(
                "min_temperature must be positive and finite, got {}",
                self.min_temperature
            )));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(AnnealError::Configuration(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(AnnealError::Configuration(
                "iterations_per_temperature must be at least 1".into(),
            ));
        }
        if self.stagnation_limit == 0 {
            return Err(AnnealError::Configuration(
                "stagnation_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Upper bound on the number of temperature levels, `ceil(ln(T_min / T0) / ln(alpha))`.
    ///
    /// Returns 0 when `T0 <= T_min`. Runs that stagnate use fewer levels.
    pub fn max_temperature_levels(&self) -> usize {
        if self.initial_temperature <= self.min_temperature {
            return 0;
        }
        let ratio = (self.min_temperature / self.initial_temperature).ln();
        (ratio / self.cooling_factor.ln()).ceil() as usize
    }
}
