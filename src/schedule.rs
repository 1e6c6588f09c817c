//! Stock temperature schedules and a guarded acceptance rule.
//!
//! The engine treats temperature and acceptance as caller-supplied
//! callbacks; these free functions are ready-made bodies for them. All are
//! pure functions of the 1-based iteration count, so a problem's
//! [`temperature`](crate::AnnealProblem::temperature) implementation can
//! delegate to one directly.

/// Floor probability returned by [`metropolis`] when the temperature is
/// exactly zero or the formula degenerates. Non-zero so a frozen run is
/// not fully deterministic.
pub const MIN_PROBABILITY: f64 = 1e-5;

/// Reciprocal decay: `T(k) = max_iterations / (alpha * k)`.
///
/// Cools quickly at first and slowly thereafter, spending most of the run
/// at low temperature. Returns 0 when the denominator is not positive
/// (before the first iteration, or a non-positive `alpha`).
///
/// Typical `alpha`: 0.5–1.0. Larger values cool faster.
pub fn reciprocal_decay(max_iterations: usize, alpha: f64, iterations: usize) -> f64 {
    let denom = iterations as f64 * alpha;
    if denom > 0.0 {
        max_iterations as f64 / denom
    } else {
        0.0
    }
}

/// Geometric decay: `T(k) = initial * alpha^k`.
///
/// The standard textbook schedule. Typical `alpha`: 0.95–0.99; must be in
/// (0, 1) for the temperature to decrease.
pub fn geometric(initial: f64, alpha: f64, iterations: usize) -> f64 {
    initial * alpha.powf(iterations as f64)
}

/// Constant temperature. Using this is not annealing — it turns the run
/// into undirected random trials — but it is occasionally useful as a
/// baseline.
pub fn constant(temperature: f64) -> f64 {
    temperature
}

/// Metropolis acceptance with the numeric guards the engine contract
/// requires of acceptance callbacks.
///
/// Computes `exp(-(candidate_energy - current_energy) / temperature)`,
/// clamped to `[0, 1]`, so an improving move is accepted with probability
/// 1 and a worsening move with exponentially decaying probability.
///
/// Guards:
/// - temperature exactly 0 returns [`MIN_PROBABILITY`] instead of
///   dividing by zero;
/// - a non-finite result (overflow at tiny temperatures, NaN energies) is
///   replaced by [`MIN_PROBABILITY`].
pub fn metropolis(current_energy: f64, candidate_energy: f64, temperature: f64) -> f64 {
    if temperature == 0.0 {
        return MIN_PROBABILITY;
    }

    let delta = candidate_energy - current_energy;
    let p = (-delta / temperature).exp();
    if p.is_finite() {
        p.min(1.0)
    } else {
        MIN_PROBABILITY
    }
}
