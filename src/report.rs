//! Progress reporting.
//!
//! The runner pushes events to a [`Reporter`]: once before the loop, every
//! time the best-ever distance strictly improves, and once at the end.

use crate::ga::Termination;
use tracing::info;

/// A new best tour was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Improvement<'a> {
    /// Generation (1-based) in which the tour was found.
    pub generation: usize,
    /// City labels of the new best tour, in visiting order.
    pub labels: Vec<&'a str>,
    /// Total distance of the new best tour.
    pub distance: f64,
}

/// The run finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finished {
    /// Best distance found over the whole run.
    pub best_distance: f64,
    /// Generations executed.
    pub generations: usize,
    /// Why the loop stopped.
    pub termination: Termination,
}

/// Receiver for optimizer progress events.
///
/// All methods default to no-ops.
pub trait Reporter {
    /// Called once after the initial population is evaluated.
    fn on_start(&mut self, _initial_distance: f64) {}

    /// Called when a generation beats the best distance seen so far.
    fn on_improvement(&mut self, _event: &Improvement<'_>) {}

    /// Called once when the loop stops.
    fn on_finish(&mut self, _event: &Finished) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Emits events through `tracing` at `INFO` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_start(&mut self, initial_distance: f64) {
        info!(distance = initial_distance, "initial shortest distance");
    }

    fn on_improvement(&mut self, event: &Improvement<'_>) {
        info!(
            generation = event.generation,
            distance = event.distance,
            tour = %event.labels.join(" "),
            "new shortest tour"
        );
    }

    fn on_finish(&mut self, event: &Finished) {
        info!(
            distance = event.best_distance,
            generations = event.generations,
            termination = ?event.termination,
            "shortest distance"
        );
    }
}
