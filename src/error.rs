//! Error type shared by every stage of the optimizer.
//!
//! All errors are fatal: the optimizer is a best-effort heuristic and does
//! not retry. The runner returns the first error it hits.

/// Errors raised while validating input or running the evolutionary loop.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TspError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The supplied city list does not match `cities_in_tour`.
    #[error("expected {expected} cities, got {actual}")]
    CityCountMismatch { expected: usize, actual: usize },

    /// Two cities share a label.
    #[error("duplicate city label: {0}")]
    DuplicateCity(String),

    /// A tour has zero total distance, so its fitness is undefined.
    #[error("degenerate tour: total distance is zero")]
    DegenerateTour,

    /// Crossover parents are not permutations of one city set, so the
    /// child would not be either.
    #[error("broken permutation: parents differ in city set (child filled {filled} of {expected})")]
    BrokenPermutation { filled: usize, expected: usize },

    /// A fitness value was read before the evaluator refreshed it.
    #[error("tour at index {0} has no fitness; evaluate it first")]
    UnevaluatedTour(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;
