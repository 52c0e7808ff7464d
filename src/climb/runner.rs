//! Multistart hill-climbing loop.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::create_rng;

use super::config::ClimbConfig;
use crate::error::Result;
use crate::sa::AnnealProblem;

/// Result of a multistart hill-climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult<S: Clone> {
    /// Best solution over all restarts.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Candidate evaluations summed over all restarts.
    pub iterations: usize,
    /// Final cost of each restart, in order.
    pub restart_costs: Vec<f64>,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl<S: Clone> ClimbResult<S> {
    /// Mean final cost over the restarts.
    pub fn mean_restart_cost(&self) -> f64 {
        self.restart_costs.iter().sum::<f64>() / self.restart_costs.len() as f64
    }
}

/// Executes multistart hill climbing.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Runs with a generator seeded from `config.seed`, or from OS entropy
    /// when no seed is set.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        config: &ClimbConfig,
    ) -> Result<ClimbResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs drawing every random decision from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<P: AnnealProblem, R: Rng>(
        problem: &P,
        config: &ClimbConfig,
        rng: &mut R,
    ) -> Result<ClimbResult<P::Solution>> {
        config.validate()?;

        let start = Instant::now();
        let mut restart_costs = Vec::with_capacity(config.restarts);

        let (mut best, mut best_cost, mut iterations) = climb(problem, config, rng);
        restart_costs.push(best_cost);
        trace!(restart = 0, cost = best_cost, iterations, "climb finished");

        for restart in 1..config.restarts {
            let (solution, cost, used) = climb(problem, config, rng);
            iterations += used;
            restart_costs.push(cost);
            trace!(restart, cost, iterations = used, "climb finished");

            if cost < best_cost {
                best = solution;
                best_cost = cost;
            }
        }
        let elapsed = start.elapsed();

        debug!(
            best_cost,
            iterations,
            restarts = restart_costs.len(),
            "hill climbing finished"
        );

        Ok(ClimbResult {
            best,
            best_cost,
            iterations,
            restart_costs,
            elapsed,
        })
    }
}

/// One climb from a fresh initial solution. Returns the local optimum, its
/// cost and the number of candidates evaluated.
fn climb<P: AnnealProblem, R: Rng>(
    problem: &P,
    config: &ClimbConfig,
    rng: &mut R,
) -> (P::Solution, f64, usize) {
    let mut current = problem.initial_solution(rng);
    let mut current_cost = problem.cost(&current);
    let mut no_improve = 0;
    let mut iterations = 0;

    while no_improve < config.max_no_improve && iterations < config.max_iterations {
        iterations += 1;
        let candidate = problem.neighbor(&current, rng);
        let candidate_cost = problem.cost(&candidate);
        if candidate_cost < current_cost {
            current = candidate;
            current_cost = candidate_cost;
            no_improve = 0;
        } else {
            no_improve += 1;
        }
    }

    (current, current_cost, iterations)
}
