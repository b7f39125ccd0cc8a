//! Tournament parent selection.
//!
//! Each parent is the fittest member of a pool sampled uniformly at random,
//! with replacement, from the population. Pools are drawn independently, so
//! the same tour may appear in several pools and may be chosen as both
//! parents.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::config::NUMBER_OF_PARENTS;
use super::fitness::fittest;
use super::types::Tour;
use crate::error::Result;
use rand::Rng;

/// Runs one tournament of size `pool_size` and returns the winner's index
/// in `tours`.
///
/// # Errors
/// Propagates [`TspError::UnevaluatedTour`](crate::TspError::UnevaluatedTour)
/// if a sampled tour has no fitness.
///
/// # Panics
/// Panics if `tours` is empty.
pub fn tournament<R: Rng>(tours: &[Tour], pool_size: usize, rng: &mut R) -> Result<usize> {
    assert!(!tours.is_empty(), "cannot select from empty population");

    let n = tours.len();
    let pool: Vec<usize> = (0..pool_size.max(1))
        .map(|_| rng.random_range(0..n))
        .collect();
    let winner = fittest(pool.iter().map(|&i| &tours[i]))?;
    Ok(pool[winner])
}

/// Selects [`NUMBER_OF_PARENTS`] parents by independent tournaments.
pub fn select_parents<'a, R: Rng>(
    tours: &'a [Tour],
    pool_size: usize,
    rng: &mut R,
) -> Result<[&'a Tour; NUMBER_OF_PARENTS]> {
    let first = tournament(tours, pool_size, rng)?;
    let second = tournament(tours, pool_size, rng)?;
    Ok([&tours[first], &tours[second]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::City;
    use crate::TspError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Vec<Tour> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut t = Tour::new(vec![
                    City::new(format!("P{i}"), i as i32, 0),
                    City::new("Q", 0, 1),
                ]);
                t.set_fitness(f);
                t
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[1.0, 5.0, 10.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = tournament(&pop, 4, &mut rng).unwrap();
            counts[idx] += 1;
        }
        // Index 2 holds the highest fitness. With replacement it is missed
        // by a pool of 4 with probability (3/4)^4 ~ 0.32.
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_pool_size_1_is_uniform() {
        let pop = make_population(&[1.0, 5.0, 10.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_equal_fitness_is_uniform() {
        let pop = make_population(&[3.0, 3.0, 3.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 2, &mut rng).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(
                c > 1500,
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_same_parent_twice_is_allowed() {
        let pop = make_population(&[5.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let [a, b] = select_parents(&pop, 3, &mut rng).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_full_pool_picks_best_often() {
        let pop = make_population(&[1.0, 9.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut hits = 0;
        for _ in 0..1000 {
            let [a, b] = select_parents(&pop, 3, &mut rng).unwrap();
            if a.fitness() == Some(9.0) && b.fitness() == Some(9.0) {
                hits += 1;
            }
        }
        // P(best in a pool of 3) = 1 - (2/3)^3 ~ 0.70, squared ~ 0.49.
        assert!(hits > 380, "both parents best only {hits}/1000 times");
    }

    #[test]
    fn test_unevaluated_pool_member_is_error() {
        let mut pop = make_population(&[1.0, 2.0]);
        pop[0].swap(0, 1);
        pop[1].swap(0, 1);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            tournament(&pop, 2, &mut rng),
            Err(TspError::UnevaluatedTour(_))
        ));
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Tour> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        let _ = tournament(&pop, 3, &mut rng);
    }
}
