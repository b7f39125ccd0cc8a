//! Evolutionary loop execution.
//!
//! [`TspRunner`] orchestrates the complete process:
//! initialization → evaluation → elite reorder → breeding → mutation →
//! evaluation → … until the generation cap, convergence or cancellation.

use super::config::TspConfig;
use super::fitness::evaluate;
use super::operators::{crossover, mutate};
use super::selection::select_parents;
use super::types::{Population, Tour};
use crate::error::{Result, TspError};
use crate::geometry::{generate_cities, City};
use crate::report::{Finished, Improvement, Reporter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Why the evolutionary loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The generation cap was reached.
    Iterations,
    /// `base_distance / best_distance` fell to or below the improvement factor.
    Converged,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct TspResult {
    /// The shortest tour found during the entire run.
    pub best: Tour,

    /// Total distance of `best`.
    pub best_distance: f64,

    /// Shortest distance in the initial random population.
    pub initial_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Why the loop stopped.
    pub termination: Termination,

    /// Best-ever distance after initialization and after each generation.
    pub distance_history: Vec<f64>,
}

/// Executes the genetic algorithm.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{TspConfig, TspRunner};
/// use u_tsp::report::NullReporter;
///
/// let config = TspConfig::default().with_iterations(50).with_seed(42);
/// let result = TspRunner::run_generated(&config, &mut NullReporter).unwrap();
/// assert!(result.best_distance <= result.initial_distance);
/// ```
pub struct TspRunner;

impl TspRunner {
    /// Runs the optimizer over `cities`, seeding the RNG from the config.
    pub fn run<Rep: Reporter>(
        cities: &[City],
        config: &TspConfig,
        reporter: &mut Rep,
    ) -> Result<TspResult> {
        Self::run_with_cancel(cities, config, reporter, None)
    }

    /// Generates `config.cities_in_tour` random cities inside
    /// `config.map_boundary` and optimizes over them.
    pub fn run_generated<Rep: Reporter>(config: &TspConfig, reporter: &mut Rep) -> Result<TspResult> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let cities = generate_cities(config.cities_in_tour, config.map_boundary, &mut rng);
        Self::run_with_rng(&cities, config, &mut rng, reporter, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// before starting the next generation and returns the best tour found
    /// so far. This is an extension on top of the generation cap, which
    /// still bounds every run; [`run`](Self::run) passes no token.
    pub fn run_with_cancel<Rep: Reporter>(
        cities: &[City],
        config: &TspConfig,
        reporter: &mut Rep,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TspResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(cities, config, &mut rng, reporter, cancel.as_deref())
    }

    /// Runs with a caller-supplied random source.
    ///
    /// `config.seed` is ignored; all randomness comes from `rng`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(cities = cities.len(), population = config.population_size)
    )]
    pub fn run_with_rng<R: Rng, Rep: Reporter>(
        cities: &[City],
        config: &TspConfig,
        rng: &mut R,
        reporter: &mut Rep,
        cancel: Option<&AtomicBool>,
    ) -> Result<TspResult> {
        config.validate()?;
        check_cities(cities, config)?;

        let elites = config.number_of_elites;

        // Init + first evaluation
        let mut population = Population::from_cities(cities, config.population_size, rng);
        let (mut best_idx, initial_distance) =
            evaluate(population.tours_mut(), config.scalar, config.parallel)?;

        let mut base_distance = initial_distance;
        let mut best = population.get(best_idx).clone();
        let mut distance_history = Vec::with_capacity(config.iterations + 1);
        distance_history.push(base_distance);

        info!(distance = initial_distance, "initial population evaluated");
        reporter.on_start(initial_distance);

        let mut generations = 0;
        let mut termination = Termination::Iterations;

        for gen in 1..=config.iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                termination = Termination::Cancelled;
                break;
            }

            // Reorder-elite: the fittest tour survives in slot 0
            population.promote(best_idx);

            // Breed from an immutable view of the ranked population
            let offspring = breed(&population, config, rng)?;
            population.replace_tail(elites, offspring);

            mutate(population.tours_mut(), elites, config.mutation_rate, rng);

            let (gen_best_idx, best_distance) =
                evaluate(population.tours_mut(), config.scalar, config.parallel)?;
            best_idx = gen_best_idx;
            generations = gen;

            if best_distance < base_distance {
                base_distance = best_distance;
                best = population.get(best_idx).clone();
                reporter.on_improvement(&Improvement {
                    generation: gen,
                    labels: best.labels(),
                    distance: best_distance,
                });
            }
            distance_history.push(base_distance);

            debug!(generation = gen, best_distance, base_distance, "generation complete");

            if base_distance / best_distance <= config.improvement_factor {
                termination = Termination::Converged;
                break;
            }
        }

        let finished = Finished {
            best_distance: base_distance,
            generations,
            termination,
        };
        info!(
            distance = base_distance,
            generations,
            termination = ?termination,
            "optimization finished"
        );
        reporter.on_finish(&finished);

        Ok(TspResult {
            best,
            best_distance: base_distance,
            initial_distance,
            generations,
            termination,
            distance_history,
        })
    }
}

/// Creates the run's RNG: seeded if `seed` is set, from entropy otherwise.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Produces the non-elite offspring for the next generation.
fn breed<R: Rng>(population: &Population, config: &TspConfig, rng: &mut R) -> Result<Vec<Tour>> {
    let tours = population.tours();
    (0..config.offspring_count())
        .map(|_| {
            let parents = select_parents(tours, config.parent_pool_size, rng)?;
            crossover(parents, rng)
        })
        .collect()
}

/// Rejects a city list that does not match the configuration.
fn check_cities(cities: &[City], config: &TspConfig) -> Result<()> {
    if cities.len() != config.cities_in_tour {
        return Err(TspError::CityCountMismatch {
            expected: config.cities_in_tour,
            actual: cities.len(),
        });
    }
    let mut seen = HashSet::with_capacity(cities.len());
    for city in cities {
        if !seen.insert(city.label()) {
            return Err(TspError::DuplicateCity(city.label().to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
