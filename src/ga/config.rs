//! Optimizer configuration.
//!
//! [`TspConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, TspError};

/// Number of parents combined by crossover. Fixed: crossover is two-parent.
pub const NUMBER_OF_PARENTS: usize = 2;

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::TspConfig;
///
/// let config = TspConfig::default();
/// assert_eq!(config.cities_in_tour, 20);
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.iterations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::TspConfig;
///
/// let config = TspConfig::default()
///     .with_cities_in_tour(40)
///     .with_population_size(100)
///     .with_parent_pool_size(7)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspConfig {
    /// Number of cities every tour visits.
    pub cities_in_tour: usize,

    /// Number of tours in the population.
    pub population_size: usize,

    /// Upper bound (inclusive) of generated city coordinates on both axes.
    pub map_boundary: u32,

    /// Maximum number of generations.
    pub iterations: usize,

    /// Tournament size: how many tours are sampled (with replacement) per
    /// parent draw.
    pub parent_pool_size: usize,

    /// Per-position swap probability applied to non-elite tours (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of leading tours carried unmutated into the next generation.
    ///
    /// Slot 0 always holds the fittest tour of the previous generation.
    pub number_of_elites: usize,

    /// Fitness normalization constant: `fitness = scalar / distance`.
    pub scalar: f64,

    /// Convergence threshold.
    ///
    /// The run stops once `base_distance / best_distance` falls to or below
    /// this value, where `base_distance` is the best distance seen so far and
    /// `best_distance` the current generation's best.
    pub improvement_factor: f64,

    /// Whether to compute tour distances in parallel.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            cities_in_tour: 20,
            population_size: 30,
            map_boundary: 1000,
            iterations: 1000,
            parent_pool_size: 5,
            mutation_rate: 0.15,
            number_of_elites: 1,
            scalar: 10_000.0,
            improvement_factor: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl TspConfig {
    /// Sets the number of cities per tour.
    pub fn with_cities_in_tour(mut self, n: usize) -> Self {
        self.cities_in_tour = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the coordinate bound for generated cities.
    pub fn with_map_boundary(mut self, boundary: u32) -> Self {
        self.map_boundary = boundary;
        self
    }

    /// Sets the generation cap.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tournament pool size.
    pub fn with_parent_pool_size(mut self, k: usize) -> Self {
        self.parent_pool_size = k;
        self
    }

    /// Sets the per-position mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites.
    pub fn with_number_of_elites(mut self, n: usize) -> Self {
        self.number_of_elites = n;
        self
    }

    /// Sets the fitness scalar.
    pub fn with_scalar(mut self, scalar: f64) -> Self {
        self.scalar = scalar;
        self
    }

    /// Sets the convergence threshold.
    pub fn with_improvement_factor(mut self, factor: f64) -> Self {
        self.improvement_factor = factor.max(0.0);
        self
    }

    /// Enables or disables parallel distance computation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: small population, short cap.
    ///
    /// - Population: 30, Iterations: 200, Pool: 3
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            iterations: 200,
            parent_pool_size: 3,
            ..Self::default()
        }
    }

    /// Preset for quality runs: larger population and more generations.
    ///
    /// - Population: 150, Iterations: 3000, Pool: 7, Elites: 3
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            iterations: 3000,
            parent_pool_size: 7,
            number_of_elites: 3,
            mutation_rate: 0.05,
            ..Self::default()
        }
    }

    /// Picks a preset from the number of cities and sets `cities_in_tour`.
    ///
    /// - `n < 50` → [`default()`](Self::default)
    /// - `50 ≤ n < 200` → [`fast()`](Self::fast) with a doubled population
    /// - `n ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(n: usize) -> Self {
        let base = if n < 50 {
            Self::default()
        } else if n < 200 {
            let fast = Self::fast();
            Self {
                population_size: fast.population_size * 2,
                iterations: 1000,
                ..fast
            }
        } else {
            Self::quality()
        };
        base.with_cities_in_tour(n)
    }

    /// Validates the configuration.
    ///
    /// Everything the loop relies on is checked here so that a bad
    /// parameter is rejected at startup rather than mid-run.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(TspError::InvalidConfig(msg.into()));

        if self.cities_in_tour < 2 {
            return invalid("cities_in_tour must be at least 2");
        }
        if self.population_size < 2 {
            return invalid("population_size must be at least 2");
        }
        if self.iterations == 0 {
            return invalid("iterations must be at least 1");
        }
        if self.number_of_elites == 0 {
            return invalid("number_of_elites must be at least 1");
        }
        if self.number_of_elites >= self.population_size {
            return invalid("number_of_elites must be less than population_size");
        }
        if self.parent_pool_size == 0 {
            return invalid("parent_pool_size must be at least 1");
        }
        if self.parent_pool_size > self.population_size {
            return invalid("parent_pool_size must not exceed population_size");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid("mutation_rate must be within [0, 1]");
        }
        if !self.scalar.is_finite() || self.scalar <= 0.0 {
            return invalid("scalar must be positive and finite");
        }
        if !self.improvement_factor.is_finite() || self.improvement_factor < 0.0 {
            return invalid("improvement_factor must be non-negative and finite");
        }
        Ok(())
    }

    /// Number of offspring bred per generation.
    pub fn offspring_count(&self) -> usize {
        self.population_size.saturating_sub(self.number_of_elites)
    }
}
