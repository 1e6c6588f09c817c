//! Annealing execution loop.

use crate::config::{AnnealConfig, ConfigError};
use crate::types::{AnnealProblem, Status};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult<C: Clone> {
    /// The best candidate found.
    pub best: C,

    /// Energy of the best candidate.
    pub best_energy: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature at the last completed iteration. NaN if the run ended
    /// before the first iteration.
    pub final_temperature: f64,

    /// Number of accepted moves.
    pub accepted_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the annealing loop.
///
/// The engine owns nothing between runs: all run state is local to
/// [`Annealer::run`] and dropped when it returns, so a finished run is
/// never resumed — start a fresh one instead.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = AnnealConfig::default().with_seed(42);
/// let result = Annealer::run(&problem, initial_candidate, &config)?;
/// println!("Best energy: {}", result.best_energy);
/// ```
pub struct Annealer;

impl Annealer {
    /// Runs the annealing loop from `initial` until the iteration budget,
    /// the energy threshold, or cancellation ends it.
    ///
    /// Fails fast with [`ConfigError`] before any callback is invoked if
    /// the configuration is invalid. Callback panics are not caught and
    /// unwind out of the run.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        initial: P::Candidate,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Candidate>, ConfigError> {
        Self::run_with_cancel(problem, initial, config, None)
    }

    /// Runs the annealing loop with an optional cancellation token.
    ///
    /// The flag is read once at the top of every iteration; setting it
    /// ends the run after at most one more full iteration. Once observed,
    /// cancellation is final for that run. The reporter can end the run
    /// it is reporting on by setting a clone of the same flag.
    pub fn run_with_cancel<P: AnnealProblem>(
        problem: &P,
        initial: P::Candidate,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult<P::Candidate>, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Initialize
        let mut current = initial;
        let mut current_energy = problem.energy(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut temperature = f64::NAN;
        let mut cancelled = false;

        debug!(
            initial_energy = current_energy,
            max_iterations = config.max_iterations,
            "annealing run started"
        );

        while iterations < config.max_iterations && best_energy > config.min_energy {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = problem.neighbor(&current, &mut rng);
            let candidate_energy = problem.energy(&candidate);
            iterations += 1;

            temperature = problem.temperature(iterations);
            let probability =
                problem.acceptance_probability(current_energy, candidate_energy, temperature);

            // Acceptance is decided solely by the callback's probability;
            // improving moves get no special treatment here.
            if rng.random_range(0.0..1.0) < probability {
                current = candidate;
                current_energy = candidate_energy;
                accepted_moves += 1;

                if candidate_energy < best_energy {
                    best = current.clone();
                    best_energy = candidate_energy;
                }
            } else if candidate_energy < best_energy {
                // Best-tracking is independent of acceptance: a rejected
                // candidate can still be the best one seen.
                best = candidate;
                best_energy = candidate_energy;
            }

            if config.report_period > 0 && iterations.is_multiple_of(config.report_period) {
                problem.report(&Status {
                    iterations,
                    best_energy,
                    best: best.clone(),
                    current_energy,
                    current: current.clone(),
                    temperature,
                });
            }
        }

        debug!(iterations, best_energy, cancelled, "annealing run finished");

        Ok(AnnealResult {
            best,
            best_energy,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            cancelled,
        })
    }
}
