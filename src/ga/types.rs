//! Tour and population data model.
//!
//! A [`Tour`] is one candidate visiting order; a [`Population`] is the fixed
//! set of tours the evolutionary loop works on each generation.

use crate::geometry::City;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// A cyclic visiting order over every city, plus its cached fitness.
///
/// The fitness is `None` until the evaluator has scored the tour, and is
/// cleared again by any operation that reorders cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<City>,
    fitness: Option<f64>,
}

impl Tour {
    /// Wraps an ordered city list as an unevaluated tour.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            fitness: None,
        }
    }

    /// Copies `canonical` and shuffles the copy.
    pub fn shuffled<R: Rng>(canonical: &[City], rng: &mut R) -> Self {
        let mut cities = canonical.to_vec();
        cities.shuffle(rng);
        Self::new(cities)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cached fitness, or `None` if the tour changed since it was scored.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Swaps two positions and invalidates the cached fitness.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.cities.swap(i, j);
        self.fitness = None;
    }

    /// City labels in visiting order.
    pub fn labels(&self) -> Vec<&str> {
        self.cities.iter().map(City::label).collect()
    }

    /// Returns `true` if this tour visits exactly the cities of `canonical`,
    /// each once.
    pub fn is_permutation_of(&self, canonical: &[City]) -> bool {
        if self.cities.len() != canonical.len() {
            return false;
        }
        let mut counts: HashMap<&City, isize> = HashMap::with_capacity(canonical.len());
        for c in canonical {
            *counts.entry(c).or_default() += 1;
        }
        for c in &self.cities {
            match counts.get_mut(c) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }
        true
    }
}

/// Fixed-size collection of tours.
///
/// The size is set at construction and never changes: tours can be swapped
/// and overwritten in place but not added or removed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Builds `size` independently shuffled copies of `canonical`.
    pub fn from_cities<R: Rng>(canonical: &[City], size: usize, rng: &mut R) -> Self {
        let tours = (0..size)
            .map(|_| Tour::shuffled(canonical, rng))
            .collect();
        Self { tours }
    }

    /// Wraps an explicit set of tours.
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn tours_mut(&mut self) -> &mut [Tour] {
        &mut self.tours
    }

    pub fn get(&self, index: usize) -> &Tour {
        &self.tours[index]
    }

    /// Moves the tour at `index` into slot 0 by swapping.
    pub fn promote(&mut self, index: usize) {
        if index != 0 {
            self.tours.swap(0, index);
        }
    }

    /// Overwrites the tours starting at `start` with `offspring`.
    ///
    /// # Panics
    /// Panics if `offspring` does not exactly fill `start..len()`.
    pub fn replace_tail(&mut self, start: usize, offspring: Vec<Tour>) {
        assert_eq!(
            start + offspring.len(),
            self.tours.len(),
            "offspring must exactly fill the non-elite region"
        );
        for (slot, child) in self.tours[start..].iter_mut().zip(offspring) {
            *slot = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Vec<City> {
        vec![
            City::new("A", 0, 0),
            City::new("B", 0, 10),
            City::new("C", 10, 10),
            City::new("D", 10, 0),
        ]
    }

    #[test]
    fn test_new_tour_is_unevaluated() {
        let tour = Tour::new(square());
        assert_eq!(tour.len(), 4);
        assert!(tour.fitness().is_none());
    }

    #[test]
    fn test_swap_clears_fitness() {
        let mut tour = Tour::new(square());
        tour.set_fitness(1.0);
        tour.swap(0, 3);
        assert!(tour.fitness().is_none());
        assert_eq!(tour.labels(), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let canonical = square();
        for _ in 0..50 {
            let tour = Tour::shuffled(&canonical, &mut rng);
            assert!(tour.is_permutation_of(&canonical));
        }
    }

    #[test]
    fn test_is_permutation_rejects_duplicates_and_omissions() {
        let canonical = square();
        let mut cities = canonical.clone();
        cities[3] = cities[0].clone();
        assert!(!Tour::new(cities).is_permutation_of(&canonical));
        assert!(!Tour::new(canonical[..3].to_vec()).is_permutation_of(&canonical));
    }

    #[test]
    fn test_population_from_cities() {
        let mut rng = StdRng::seed_from_u64(1);
        let canonical = square();
        let pop = Population::from_cities(&canonical, 12, &mut rng);
        assert_eq!(pop.len(), 12);
        assert!(pop.tours().iter().all(|t| t.is_permutation_of(&canonical)));
        assert!(pop.tours().iter().all(|t| t.fitness().is_none()));
    }

    #[test]
    fn test_promote_swaps_into_first_slot() {
        let canonical = square();
        let mut reversed = canonical.clone();
        reversed.reverse();
        let mut pop = Population::from_tours(vec![
            Tour::new(canonical.clone()),
            Tour::new(reversed.clone()),
        ]);
        pop.promote(1);
        assert_eq!(pop.get(0).cities(), reversed.as_slice());
        assert_eq!(pop.get(1).cities(), canonical.as_slice());
        pop.promote(0);
        assert_eq!(pop.get(0).cities(), reversed.as_slice());
    }

    #[test]
    fn test_replace_tail_keeps_prefix() {
        let canonical = square();
        let mut pop = Population::from_tours(vec![Tour::new(canonical.clone()); 3]);
        pop.tours_mut()[0].set_fitness(2.5);
        let mut reversed = canonical.clone();
        reversed.reverse();
        pop.replace_tail(1, vec![Tour::new(reversed.clone()); 2]);
        assert_eq!(pop.get(0).fitness(), Some(2.5));
        assert_eq!(pop.get(2).cities(), reversed.as_slice());
    }

    #[test]
    #[should_panic(expected = "offspring must exactly fill the non-elite region")]
    fn test_replace_tail_wrong_size_panics() {
        let mut pop = Population::from_tours(vec![Tour::new(square()); 3]);
        pop.replace_tail(1, vec![Tour::new(square())]);
    }
}
