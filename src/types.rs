//! Core trait for the annealing engine.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The engine knows nothing about the candidate representation: it only
/// shuttles candidates between the callbacks defined here and tracks the
/// best one seen. The user implements neighbor generation, energy
/// evaluation, the temperature schedule, and the acceptance rule; the
/// engine handles iteration, best-tracking, cancellation, and reporting.
///
/// # Minimization
///
/// The engine minimizes energy. For maximization, negate the energy.
///
/// # Aliasing
///
/// `neighbor` receives the current candidate by reference and must return
/// an independent value. The engine performs no defensive copy: an
/// implementation that hands back a view into shared storage and then
/// mutates it corrupts the engine's current candidate mid-iteration.
/// Clone-then-perturb is the intended pattern.
///
/// # Examples
///
/// ```ignore
/// struct TourProblem { /* distance data */ }
///
/// impl AnnealProblem for TourProblem {
///     type Candidate = Vec<usize>;
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut next = tour.clone();
///         let i = rng.random_range(0..next.len());
///         let j = rng.random_range(0..next.len());
///         next.swap(i, j);
///         next
///     }
///
///     fn energy(&self, tour: &Vec<usize>) -> f64 {
///         tour.windows(2).map(|w| self.distance(w[0], w[1])).sum()
///     }
///
///     fn temperature(&self, iterations: usize) -> f64 {
///         schedule::reciprocal_decay(10_000, 0.6, iterations)
///     }
///
///     fn acceptance_probability(&self, current: f64, candidate: f64, t: f64) -> f64 {
///         schedule::metropolis(current, candidate, t)
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait AnnealProblem: Send + Sync {
    /// The candidate (search-space point) representation type.
    type Candidate: Clone;

    /// Generates a neighbor of the current candidate.
    ///
    /// The neighbor should be "close" to the input (small perturbation),
    /// and the neighborhood must be connected so any candidate is
    /// reachable via a sequence of moves. Must return an independent
    /// value; see the trait-level aliasing note.
    fn neighbor<R: Rng>(&self, candidate: &Self::Candidate, rng: &mut R) -> Self::Candidate;

    /// Computes the energy of a candidate. Lower is better.
    ///
    /// If the candidate type has a distinguished "empty" value (an empty
    /// tour, say), implementations should map it to a neutral energy such
    /// as `0.0` rather than panicking.
    fn energy(&self, candidate: &Self::Candidate) -> f64;

    /// Returns the temperature after `iterations` completed iterations.
    ///
    /// `iterations` is 1-based: the first call in a run receives 1. The
    /// schedule should approach zero as the count grows for the search to
    /// converge; the engine does not enforce monotonic decrease.
    fn temperature(&self, iterations: usize) -> f64;

    /// Probability in `[0, 1]` of moving from the current candidate to
    /// the proposed one at the given temperature.
    ///
    /// The engine compares a uniform draw in `[0, 1)` against this value
    /// and nothing else: whether an improving move is always accepted is
    /// entirely this method's decision. Implementations must return a
    /// fixed non-zero minimum when `temperature` is exactly zero and must
    /// substitute that minimum for any non-finite intermediate result at
    /// tiny temperatures; the engine provides no numeric guard of its
    /// own. [`crate::schedule::metropolis`] implements these obligations.
    fn acceptance_probability(
        &self,
        current_energy: f64,
        candidate_energy: f64,
        temperature: f64,
    ) -> f64;

    /// Called every `report_period` iterations with a snapshot of the run.
    ///
    /// Invoked synchronously; the loop blocks until it returns, and a
    /// panic here propagates out of the run. The default implementation
    /// does nothing.
    fn report(&self, status: &Status<Self::Candidate>) {
        let _ = status;
    }
}

/// Snapshot of the run state handed to [`AnnealProblem::report`].
///
/// Built fresh from clones at each report, so nothing the reporter does
/// with it can reach the engine's own state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status<C: Clone> {
    /// Iterations completed so far (a multiple of the report period).
    pub iterations: usize,

    /// Lowest energy observed across the whole run.
    pub best_energy: f64,

    /// The candidate that produced `best_energy`.
    pub best: C,

    /// Energy of the current candidate (the initial one until a move is
    /// accepted).
    pub current_energy: f64,

    /// The current candidate (the initial one until a move is accepted).
    pub current: C,

    /// Temperature at the iteration that triggered this report.
    pub temperature: f64,
}
