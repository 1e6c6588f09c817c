//! Tour-length minimization over random 3D points.
//!
//! Reference problem for the engine: the candidate is an ordering of 100
//! random points in `[0, 500]^3`, a neighbor swaps two randomly chosen
//! points, and the energy is the summed Euclidean distance between
//! consecutive points. Run with `--show-state` to dump the best tour at
//! each report.

use annealer::{schedule, AnnealConfig, AnnealProblem, Annealer, Status};
use rand::Rng;

type Point = [f64; 3];

fn distance(a: &Point, b: &Point) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

struct Tour3d {
    max_iterations: usize,
    alpha: f64,
    show_state: bool,
}

impl AnnealProblem for Tour3d {
    type Candidate = Vec<Point>;

    fn neighbor<R: Rng>(&self, tour: &Vec<Point>, rng: &mut R) -> Vec<Point> {
        // Clone first: the engine hands us its current candidate.
        let mut next = tour.clone();
        let i = rng.random_range(0..next.len());
        let j = rng.random_range(0..next.len());
        next.swap(i, j);
        next
    }

    fn energy(&self, tour: &Vec<Point>) -> f64 {
        // An empty tour traverses nothing: neutral energy.
        tour.windows(2).map(|w| distance(&w[0], &w[1])).sum()
    }

    fn temperature(&self, iterations: usize) -> f64 {
        schedule::reciprocal_decay(self.max_iterations, self.alpha, iterations)
    }

    fn acceptance_probability(&self, current: f64, candidate: f64, t: f64) -> f64 {
        schedule::metropolis(current, candidate, t)
    }

    fn report(&self, status: &Status<Vec<Point>>) {
        println!("=============== {} ===============", status.iterations);
        println!("current best energy: {:.2}", status.best_energy);
        println!("last accepted energy: {:.2}", status.current_energy);
        println!("current temperature: {:.4}", status.temperature);
        if self.show_state {
            println!("best tour: {:?}", status.best);
        }
    }
}

fn main() {
    let show_state = std::env::args().any(|arg| arg == "--show-state");
    let max_iterations = 10_000;

    let problem = Tour3d {
        max_iterations,
        alpha: 0.6,
        show_state,
    };

    let mut rng = rand::rng();
    let initial: Vec<Point> = (0..100)
        .map(|_| {
            [
                rng.random_range(0.0..=500.0),
                rng.random_range(0.0..=500.0),
                rng.random_range(0.0..=500.0),
            ]
        })
        .collect();

    let config = AnnealConfig::default()
        .with_max_iterations(max_iterations)
        .with_min_energy(0.0)
        .with_report_period(500);

    let result = Annealer::run(&problem, initial, &config).expect("config is valid");

    println!(
        "finished after {} iterations: best tour length {:.2}",
        result.iterations, result.best_energy
    );
}
