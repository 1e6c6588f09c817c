//! Criterion benchmarks for the annealing engine.
//!
//! Uses the synthetic sphere function (minimize `sum(x_i^2)`) to measure
//! pure engine overhead independent of any domain.

use annealer::{schedule, AnnealConfig, AnnealProblem, Annealer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

struct Sphere {
    dim: usize,
}

impl AnnealProblem for Sphere {
    type Candidate = Vec<f64>;

    fn neighbor<R: Rng>(&self, sol: &Vec<f64>, rng: &mut R) -> Vec<f64> {
        let mut next = sol.clone();
        let i = rng.random_range(0..self.dim);
        next[i] += rng.random_range(-0.5..0.5);
        next
    }

    fn energy(&self, sol: &Vec<f64>) -> f64 {
        sol.iter().map(|x| x * x).sum()
    }

    fn temperature(&self, iterations: usize) -> f64 {
        schedule::geometric(100.0, 0.999, iterations)
    }

    fn acceptance_probability(&self, current: f64, candidate: f64, t: f64) -> f64 {
        schedule::metropolis(current, candidate, t)
    }
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_sphere");
    group.sample_size(10);

    for (dim, iters) in [(10usize, 5_000usize), (50, 5_000), (100, 2_000)] {
        let problem = Sphere { dim };
        let config = AnnealConfig::default()
            .with_max_iterations(iters)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_i{}", dim, iters), dim),
            &(problem, config),
            |b, (p, cfg)| {
                b.iter(|| {
                    let initial = vec![3.0; p.dim];
                    let result = Annealer::run(black_box(p), black_box(initial), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sphere);
criterion_main!(benches);
