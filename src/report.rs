//! Optimization result reporting.

use serde::Serialize;

use crate::trace::RunTrace;

/// A report containing the outcome of a completed optimization run.
///
/// The report carries the swarm-best record, the iteration and evaluation
/// counts, and the full iteration trace so consumers can replay the run
/// without touching optimizer internals.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationReport {
    /// Best position found by the swarm
    pub best_position: f64,
    /// Fitness value realized at `best_position`
    pub best_fitness: f64,
    /// Number of completed iteration passes
    pub iterations: usize,
    /// Number of objective evaluations performed
    pub evaluations: usize,
    /// Per-iteration snapshots, starting with the initialization state
    pub trace: RunTrace,
}

impl OptimizationReport {
    pub(crate) fn new(
        best_position: f64,
        best_fitness: f64,
        iterations: usize,
        evaluations: usize,
        trace: RunTrace,
    ) -> Self {
        Self {
            best_position,
            best_fitness,
            iterations,
            evaluations,
            trace,
        }
    }
}
