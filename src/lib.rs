//! Domain-agnostic simulated annealing engine.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process: the search accepts worsening moves with a
//! probability that shrinks as a temperature parameter decays, letting it
//! escape local optima early and settle later.
//!
//! The engine is deliberately minimal. It owns only the control loop —
//! iteration, acceptance, best-so-far tracking, cooperative cancellation,
//! and periodic status reporting. Everything problem-specific (candidate
//! representation, neighbor generation, energy evaluation, the temperature
//! schedule, the acceptance rule) plugs in through the [`AnnealProblem`]
//! trait; the engine never inspects a candidate's structure.
//!
//! # Architecture
//!
//! - [`AnnealProblem`] — the callback contract a problem implements.
//! - [`AnnealConfig`] — iteration budget, energy threshold, report period,
//!   RNG seed.
//! - [`Annealer`] — the run loop; blocking, single-threaded, cancellable
//!   through an `Arc<AtomicBool>` token.
//! - [`schedule`] — stock temperature schedules and a guarded Metropolis
//!   acceptance rule for problems that don't need custom ones.
//!
//! # Example
//!
//! ```
//! use annealer::{schedule, AnnealConfig, AnnealProblem, Annealer};
//! use rand::Rng;
//!
//! /// Minimize x^2 over the reals.
//! struct Quadratic;
//!
//! impl AnnealProblem for Quadratic {
//!     type Candidate = f64;
//!
//!     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
//!         x + rng.random_range(-1.0..1.0)
//!     }
//!
//!     fn energy(&self, x: &f64) -> f64 {
//!         x * x
//!     }
//!
//!     fn temperature(&self, iterations: usize) -> f64 {
//!         schedule::geometric(10.0, 0.999, iterations)
//!     }
//!
//!     fn acceptance_probability(&self, current: f64, candidate: f64, t: f64) -> f64 {
//!         schedule::metropolis(current, candidate, t)
//!     }
//! }
//!
//! let config = AnnealConfig::default().with_seed(42);
//! let result = Annealer::run(&Quadratic, 8.0, &config).unwrap();
//! assert!(result.best_energy < 8.0 * 8.0);
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
pub mod schedule;
mod types;

pub use config::{AnnealConfig, ConfigError};
pub use runner::{AnnealResult, Annealer};
pub use types::{AnnealProblem, Status};
