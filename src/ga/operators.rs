//! Permutation-preserving genetic operators on tours.
//!
//! # Crossover
//!
//! - [`crossover`] / [`crossover_at`]: one-cut ordered crossover. The child
//!   keeps parent 0's prefix and takes the remaining cities in parent 1's
//!   order.
//!
//! # Mutation
//!
//! - [`mutate`]: per-position random swap over the non-elite region.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::config::NUMBER_OF_PARENTS;
use super::types::Tour;
use crate::error::{Result, TspError};
use crate::geometry::City;
use rand::Rng;
use std::collections::HashSet;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover with a random cut point drawn from `[0, n)`.
pub fn crossover<R: Rng>(parents: [&Tour; NUMBER_OF_PARENTS], rng: &mut R) -> Result<Tour> {
    let n = parents[0].len();
    let cut = if n == 0 { 0 } else { rng.random_range(0..n) };
    crossover_at(parents, cut)
}

/// Ordered crossover at a fixed cut point.
///
/// 1. Copy `parents[0][..cut]` into the child.
/// 2. Fill the remaining slots with `parents[1]`'s cities in order,
///    skipping any already in the prefix.
///
/// `cut == 0` reproduces parent 1, `cut >= n` reproduces parent 0.
///
/// # Errors
/// [`TspError::BrokenPermutation`] if the parents are not permutations of
/// the same city set: the donor has a different length, repeats a city, or
/// holds a city the head does not.
pub fn crossover_at(parents: [&Tour; NUMBER_OF_PARENTS], cut: usize) -> Result<Tour> {
    let [head, donor] = parents;
    let n = head.len();
    let cut = cut.min(n);

    let mut child: Vec<City> = Vec::with_capacity(n);
    child.extend_from_slice(&head.cities()[..cut]);

    let mut taken: HashSet<&City> = head.cities()[..cut].iter().collect();
    for city in donor.cities() {
        if child.len() == n {
            break;
        }
        if taken.insert(city) {
            child.push(city.clone());
        }
    }

    if child.len() != n || !donor.is_permutation_of(head.cities()) {
        return Err(TspError::BrokenPermutation {
            filled: child.len(),
            expected: n,
        });
    }
    Ok(Tour::new(child))
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation over `tours[elites..]`.
///
/// Every position `j` of every non-elite tour is, with probability `rate`,
/// swapped with a uniformly random position (possibly `j` itself). Elites
/// are left untouched. Returns the number of swaps drawn.
pub fn mutate<R: Rng>(tours: &mut [Tour], elites: usize, rate: f64, rng: &mut R) -> usize {
    let mut swaps = 0;
    for tour in tours.iter_mut().skip(elites) {
        swaps += mutate_tour(tour, rate, rng);
    }
    swaps
}

/// Swap mutation on a single tour.
pub fn mutate_tour<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) -> usize {
    let n = tour.len();
    if n == 0 || rate <= 0.0 {
        return 0;
    }
    let rate = rate.min(1.0);
    let mut swaps = 0;
    for j in 0..n {
        if rng.random_bool(rate) {
            let k = rng.random_range(0..n);
            tour.swap(j, k);
            swaps += 1;
        }
    }
    swaps
}

// ============================================================================
// Tests
// ============================================================================
