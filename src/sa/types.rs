//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a problem the annealing engine can search.
///
/// The implementor supplies the initial solution, the cost function and a
/// neighbor generator. The engine owns temperature management, the
/// acceptance test, stagnation tracking and statistics.
///
/// # Minimization
///
/// The engine minimizes `cost`. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use tsp_anneal::sa::AnnealProblem;
///
/// struct Parabola;
///
/// impl AnnealProblem for Parabola {
///     type Solution = f64;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
///         rng.random_range(-10.0..10.0)
///     }
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
pub trait AnnealProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates an independent neighbor of `solution`.
    ///
    /// Must not mutate the input; the engine keeps the current solution
    /// unchanged when the candidate is rejected.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
