//! Cities and the planar distance between them.
//!
//! Also hosts the random city-map generator used when no city list is
//! supplied by the caller.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A named point on the integer map.
///
/// Cities are immutable reference data. Every tour holds its own ordered
/// copy, so the label is reference-counted to keep clones cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    label: Arc<str>,
    x: i32,
    y: i32,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(label: impl Into<Arc<str>>, x: i32, y: i32) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.label, self.x, self.y)
    }
}

/// Euclidean distance between two cities.
#[inline]
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Generates `n` cities labelled `City#0 .. City#{n-1}` with coordinates
/// drawn uniformly from `[0, boundary]` on both axes.
pub fn generate_cities<R: Rng>(n: usize, boundary: u32, rng: &mut R) -> Vec<City> {
    let max = i32::try_from(boundary).unwrap_or(i32::MAX);
    (0..n)
        .map(|i| {
            City::new(
                format!("City#{i}"),
                rng.random_range(0..=max),
                rng.random_range(0..=max),
            )
        })
        .collect()
}
