//! SA execution loop.

use super::config::AnnealConfig;
use super::types::AnnealProblem;
use crate::error::Result;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use u_numflow::random::create_rng;

/// Why an annealing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The temperature dropped to `min_temperature` or below.
    Cooled,
    /// `stagnation_limit` consecutive candidates were rejected.
    Stagnated,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Arithmetic mean of the current cost recorded after every completed
    /// iteration. 0 when no sample was recorded.
    ///
    /// The iteration that triggers stagnation is not sampled.
    pub mean_cost: f64,

    /// Number of samples behind `mean_cost`.
    pub samples: usize,

    /// Total number of candidate evaluations.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    ///
    /// After stagnation this is the temperature of the aborted level.
    pub final_temperature: f64,

    /// Why the run stopped.
    pub termination: Termination,

    /// Temperature of every level entered, in order.
    pub temperature_history: Vec<f64>,

    /// Best cost at the end of every level, including an aborted one.
    pub cost_history: Vec<f64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl<S: Clone> AnnealResult<S> {
    /// Elapsed wall-clock time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs SA with a generator seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: AnnealProblem, R: Rng>(
        problem: &P,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult<P::Solution>> {
        config.validate()?;

        let start = Instant::now();

        // Initialize
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut stagnation = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut sample_sum = 0.0;
        let mut samples = 0usize;
        let mut termination = Termination::Cooled;

        let mut temperature_history = Vec::new();
        let mut cost_history = Vec::new();

        debug!(
            initial_cost = current_cost,
            temperature, "annealing started"
        );

        'levels: while temperature > config.min_temperature {
            temperature_history.push(temperature);

            for _ in 0..config.iterations_per_temperature {
                let candidate = problem.neighbor(&current, rng);
                let candidate_cost = problem.cost(&candidate);
                let delta = candidate_cost - current_cost;
                iterations += 1;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;
                    stagnation = 0;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                } else {
                    stagnation += 1;
                }

                // The iteration that hits the limit is not sampled.
                if stagnation >= config.stagnation_limit {
                    termination = Termination::Stagnated;
                    cost_history.push(best_cost);
                    debug!(
                        iterations,
                        temperature, best_cost, "stagnation limit reached"
                    );
                    break 'levels;
                }

                sample_sum += current_cost;
                samples += 1;
            }

            cost_history.push(best_cost);
            trace!(temperature, current_cost, best_cost, "temperature level done");

            temperature *= config.cooling_factor;
        }

        let mean_cost = if samples == 0 {
            0.0
        } else {
            sample_sum / samples as f64
        };
        let elapsed = start.elapsed();

        debug!(
            best_cost,
            mean_cost,
            iterations,
            levels = temperature_history.len(),
            ?termination,
            "annealing finished"
        );

        Ok(AnnealResult {
            best,
            best_cost,
            mean_cost,
            samples,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            termination,
            temperature_history,
            cost_history,
            elapsed,
        })
    }
}
