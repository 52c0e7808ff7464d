//! Core trait for Tabu Search problems.

use rand::Rng;

/// A move that transforms one solution into another.
///
/// The `key` identifies the move in the tabu list; moves with the same key
/// are treated as the same move.
#[derive(Debug, Clone)]
pub struct TabuMove<S: Clone> {
    /// The resulting solution after applying this move.
    pub solution: S,
    /// Key identifying this move for tabu tracking.
    pub key: String,
    /// Cost of the resulting solution.
    pub cost: f64,
}

/// Defines a combinatorial optimization problem for Tabu Search.
pub trait TabuProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + Send;

    /// Creates an initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates the cost of a solution (lower is better).
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates neighboring solutions with their move keys and costs.
    ///
    /// The neighborhood need not be exhaustive; a random sample is acceptable.
    fn neighbors<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Vec<TabuMove<Self::Solution>>;
}
