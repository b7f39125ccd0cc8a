//! Fitness evaluation.
//!
//! Fitness is `scalar / distance`, so shorter tours score higher. Ties on
//! distance resolve to the earliest tour in scan order.

use super::types::Tour;
use crate::error::{Result, TspError};
use crate::geometry::distance;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Total length of the closed cycle described by `tour`.
pub fn tour_distance(tour: &Tour) -> f64 {
    let cities = tour.cities();
    let n = cities.len();
    (0..n)
        .map(|i| distance(&cities[i], &cities[(i + 1) % n]))
        .sum()
}

/// Scores every tour and returns the index and distance of the shortest one.
///
/// Each tour's cached fitness is overwritten with `scalar / distance`. The
/// returned distance is the one computed here, not recovered from fitness.
///
/// # Errors
/// [`TspError::DegenerateTour`] if any tour has zero total distance.
///
/// # Panics
/// Panics if `tours` is empty.
pub fn evaluate(tours: &mut [Tour], scalar: f64, parallel: bool) -> Result<(usize, f64)> {
    assert!(!tours.is_empty(), "cannot evaluate an empty population");

    let distances = compute_distances(tours, parallel);

    let mut best_idx = 0;
    let mut best_distance = f64::INFINITY;
    for (i, (tour, &d)) in tours.iter_mut().zip(&distances).enumerate() {
        if d <= 0.0 {
            return Err(TspError::DegenerateTour);
        }
        tour.set_fitness(scalar / d);
        if d < best_distance {
            best_idx = i;
            best_distance = d;
        }
    }
    Ok((best_idx, best_distance))
}

/// Index of the fittest tour among already-evaluated tours.
///
/// The first tour holding the highest fitness wins.
///
/// # Errors
/// [`TspError::UnevaluatedTour`] with the offending position if a tour has
/// no cached fitness.
///
/// # Panics
/// Panics if `tours` yields nothing.
pub fn fittest<'a, I>(tours: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Tour>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, tour) in tours.into_iter().enumerate() {
        let f = tour.fitness().ok_or(TspError::UnevaluatedTour(i))?;
        match best {
            Some((_, bf)) if f <= bf => {}
            _ => best = Some((i, f)),
        }
    }
    let (idx, _) = best.expect("cannot pick the fittest of no tours");
    Ok(idx)
}

#[cfg(feature = "parallel")]
fn compute_distances(tours: &[Tour], parallel: bool) -> Vec<f64> {
    if parallel {
        tours.par_iter().map(tour_distance).collect()
    } else {
        tours.iter().map(tour_distance).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn compute_distances(tours: &[Tour], _parallel: bool) -> Vec<f64> {
    tours.iter().map(tour_distance).collect()
}
