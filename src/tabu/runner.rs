//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate initial solution
//! 2. At each iteration:
//!    a. Generate neighborhood
//!    b. Select the best non-tabu move (or tabu move satisfying aspiration)
//!    c. Apply the move, add its key to the tabu list
//!    d. Update global best if improved
//! 3. Terminate after max iterations or `max_no_improve` iterations without
//!    a new global best

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::create_rng;

use super::config::TabuConfig;
use super::types::{TabuMove, TabuProblem};
use crate::error::Result;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 for the initial solution).
    pub best_iteration: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// FIFO of recent move keys with multiplicity counts for O(1) lookup.
struct TabuList {
    tenure: usize,
    queue: VecDeque<String>,
    counts: HashMap<String, usize>,
}

impl TabuList {
    fn new(tenure: usize) -> Self {
        Self {
            tenure,
            queue: VecDeque::with_capacity(tenure),
            counts: HashMap::new(),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    fn push(&mut self, key: &str) {
        if self.tenure == 0 {
            return;
        }
        if self.queue.len() >= self.tenure {
            if let Some(old) = self.queue.pop_front() {
                if let Some(count) = self.counts.get_mut(&old) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(&old);
                    }
                }
            }
        }
        self.queue.push_back(key.to_owned());
        *self.counts.entry(key.to_owned()).or_insert(0) += 1;
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search with a generator seeded from `config.seed`, or from
    /// OS entropy when no seed is set.
    pub fn run<P: TabuProblem>(problem: &P, config: &TabuConfig) -> Result<TabuResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs Tabu Search drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: TabuProblem, R: Rng>(
        problem: &P,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult<P::Solution>> {
        config.validate()?;

        let start = Instant::now();

        let mut current = problem.initial_solution(rng);
        let mut best = current.clone();
        let mut best_cost = problem.cost(&current);
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_tenure);
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut no_improve = 0;

        debug!(initial_cost = best_cost, "tabu search started");

        for iteration in 1..=config.max_iterations {
            let neighbors = problem.neighbors(&current, rng);
            if neighbors.is_empty() {
                cost_history.push(best_cost);
                break;
            }

            let chosen = best_admissible(&neighbors, &tabu, config.aspiration, best_cost)
                .or_else(|| cheapest(neighbors.iter()));

            if let Some(mv) = chosen {
                tabu.push(&mv.key);
                current = mv.solution.clone();

                if mv.cost < best_cost {
                    best = current.clone();
                    best_cost = mv.cost;
                    best_iteration = iteration;
                    no_improve = 0;
                    trace!(iteration, best_cost, "new best");
                } else {
                    no_improve += 1;
                }
            }

            cost_history.push(best_cost);

            if no_improve >= config.max_no_improve {
                break;
            }
        }

        let elapsed = start.elapsed();
        debug!(
            best_cost,
            best_iteration,
            iterations = cost_history.len(),
            "tabu search finished"
        );

        Ok(TabuResult {
            best,
            best_cost,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
            elapsed,
        })
    }
}

/// Cheapest non-tabu move, or a tabu move that beats `best_cost` under aspiration.
fn best_admissible<'m, S: Clone>(
    moves: &'m [TabuMove<S>],
    tabu: &TabuList,
    aspiration: bool,
    best_cost: f64,
) -> Option<&'m TabuMove<S>> {
    cheapest(
        moves
            .iter()
            .filter(|mv| !tabu.contains(&mv.key) || (aspiration && mv.cost < best_cost)),
    )
}

/// First move with the lowest cost; ties keep the earliest.
fn cheapest<'m, S: Clone>(moves: impl Iterator<Item = &'m TabuMove<S>>) -> Option<&'m TabuMove<S>> {
    let mut best: Option<&'m TabuMove<S>> = None;
    let mut best_cost = f64::INFINITY;
    for mv in moves {
        if best.is_none() || mv.cost < best_cost {
            best = Some(mv);
            best_cost = mv.cost;
        }
    }
    best
}
