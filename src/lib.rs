//! Genetic-algorithm optimizer for the Euclidean Traveling Salesman Problem.
//!
//! Given a fixed set of cities, searches for a short closed tour visiting
//! each city once:
//!
//! - **Geometry**: cities, Euclidean distance and random map generation.
//! - **GA**: tours, populations, fitness evaluation, tournament selection,
//!   ordered crossover, swap mutation and the elitist evolutionary loop.
//! - **Reporting**: progress events for improved tours and run completion.
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::{TspConfig, TspRunner};
//! use u_tsp::report::NullReporter;
//!
//! let config = TspConfig::default().with_iterations(100).with_seed(7);
//! let result = TspRunner::run_generated(&config, &mut NullReporter).unwrap();
//! assert_eq!(result.best.len(), config.cities_in_tour);
//! ```

mod error;
pub mod ga;
pub mod geometry;
pub mod report;

pub use error::{Result, TspError};
