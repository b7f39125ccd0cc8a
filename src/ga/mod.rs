//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Each generation the fittest tour is kept in slot 0, the remaining
//! non-elite slots are refilled by tournament selection and ordered
//! crossover, the refilled tours are swap-mutated, and the whole population
//! is re-scored.
//!
//! # Key Types
//!
//! - [`Tour`] / [`Population`]: the data model
//! - [`TspConfig`]: algorithm parameters
//! - [`TspRunner`]: executes the evolutionary loop
//! - [`TspResult`]: best tour, distances and termination reason
//!
//! # Submodules
//!
//! - [`fitness`]: tour distance and fitness evaluation
//! - [`selection`]: tournament parent selection
//! - [`operators`]: ordered crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{TspConfig, NUMBER_OF_PARENTS};
pub use runner::{create_rng, Termination, TspResult, TspRunner};
pub use types::{Population, Tour};
