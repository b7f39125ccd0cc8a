//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Uses seeded random maps so every sample optimizes the same instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::ga::fitness::{evaluate, tour_distance};
use u_tsp::ga::operators::crossover;
use u_tsp::ga::{Population, Tour, TspConfig, TspRunner};
use u_tsp::geometry::generate_cities;
use u_tsp::report::NullReporter;

fn bench_tour_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_distance");

    for &n in &[20usize, 100, 500] {
        let mut rng = StdRng::seed_from_u64(42);
        let cities = generate_cities(n, 1000, &mut rng);
        let tour = Tour::shuffled(&cities, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tour, |b, t| {
            b.iter(|| black_box(tour_distance(black_box(t))))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &pop in &[30usize, 300] {
        let mut rng = StdRng::seed_from_u64(42);
        let cities = generate_cities(100, 1000, &mut rng);
        let population = Population::from_cities(&cities, pop, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &population, |b, p| {
            b.iter(|| {
                let mut p = p.clone();
                black_box(evaluate(p.tours_mut(), 10_000.0, false))
            })
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");

    for &n in &[20usize, 100, 500] {
        let mut rng = StdRng::seed_from_u64(42);
        let cities = generate_cities(n, 1000, &mut rng);
        let p0 = Tour::shuffled(&cities, &mut rng);
        let p1 = Tour::shuffled(&cities, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p0, p1), |b, (p0, p1)| {
            b.iter(|| black_box(crossover([p0, p1], &mut rng)))
        });
    }
    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");
    group.sample_size(10);

    for (n, pop, gens) in [(20usize, 30usize, 200usize), (50, 100, 100)] {
        let config = TspConfig::default()
            .with_cities_in_tour(n)
            .with_population_size(pop)
            .with_iterations(gens)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gens), n),
            &config,
            |b, c| {
                b.iter(|| black_box(TspRunner::run_generated(black_box(c), &mut NullReporter)))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_tour_distance,
    bench_evaluate,
    bench_crossover,
    bench_runner
);
criterion_main!(benches);
