//! Engine configuration.

use thiserror::Error;

/// Invalid [`AnnealConfig`] values, reported before any iteration runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_iterations` was zero; the run would never execute.
    #[error("max_iterations must be positive")]
    ZeroIterationBudget,

    /// `min_energy` was NaN, making the stopping comparison meaningless.
    #[error("min_energy must not be NaN (use f64::NEG_INFINITY to disable)")]
    NanEnergyThreshold,
}

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use annealer::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(10_000)
///     .with_min_energy(0.0)
///     .with_report_period(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Hard budget of iterations. The run stops once this many have
    /// completed. Must be positive.
    pub max_iterations: usize,

    /// Energy threshold. The run stops once the best energy drops to or
    /// below this value. `f64::NEG_INFINITY` makes it unreachable.
    pub min_energy: f64,

    /// Invoke [`AnnealProblem::report`](crate::AnnealProblem::report)
    /// every this many iterations. 0 = no reporting.
    pub report_period: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            min_energy: f64::NEG_INFINITY,
            report_period: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_min_energy(mut self, e: f64) -> Self {
        self.min_energy = e;
        self
    }

    pub fn with_report_period(mut self, n: usize) -> Self {
        self.report_period = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        if self.min_energy.is_nan() {
            return Err(ConfigError::NanEnergyThreshold);
        }
        Ok(())
    }
}
