//! Iteration trace and per-iteration snapshots.
//!
//! The optimizer appends one snapshot per completed pass (plus one for the
//! initialization state). Snapshots are owned copies, never live references,
//! so a reporting or visualization layer can buffer the entire run before
//! consuming any of it.

use ndarray::Array1;
use serde::Serialize;

/// State of the swarm at the end of one iteration.
///
/// Snapshot 0 records the freshly initialized swarm; snapshot `i` records
/// the swarm after iteration `i` completed. Positions are stored in particle
/// creation order, which is also the optimizer's pass order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationSnapshot {
    /// Iteration index; 0 is the initialization state
    pub iteration: usize,
    /// Current position of every particle
    pub positions: Array1<f64>,
    /// Current personal-best position of every particle
    pub personal_best_positions: Array1<f64>,
    /// Best position found by the swarm so far
    pub best_position: f64,
    /// Best fitness found by the swarm so far
    pub best_fitness: f64,
}

/// Append-only sequence of iteration snapshots.
///
/// Snapshots are read-only once appended; the trace only ever grows at the
/// back while the run is in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunTrace {
    snapshots: Vec<IterationSnapshot>,
}

impl RunTrace {
    pub(crate) fn push(&mut self, snapshot: IterationSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Number of recorded snapshots, including the initialization snapshot.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at the given index, if recorded.
    pub fn get(&self, index: usize) -> Option<&IterationSnapshot> {
        self.snapshots.get(index)
    }

    /// The initialization snapshot, if the optimizer has been initialized.
    pub fn initial(&self) -> Option<&IterationSnapshot> {
        self.snapshots.first()
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&IterationSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IterationSnapshot> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a RunTrace {
    type Item = &'a IterationSnapshot;
    type IntoIter = std::slice::Iter<'a, IterationSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn snapshot(iteration: usize) -> IterationSnapshot {
        IterationSnapshot {
            iteration,
            positions: array![0.0, 5.0],
            personal_best_positions: array![0.0, 5.0],
            best_position: 5.0,
            best_fitness: -4.0,
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let mut trace = RunTrace::default();
        assert!(trace.is_empty());

        trace.push(snapshot(0));
        trace.push(snapshot(1));
        trace.push(snapshot(2));

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.initial().unwrap().iteration, 0);
        assert_eq!(trace.last().unwrap().iteration, 2);
        let iterations: Vec<usize> = trace.iter().map(|s| s.iteration).collect();
        assert_eq!(iterations, vec![0, 1, 2]);
    }

    #[test]
    fn test_snapshots_serialize() {
        let mut trace = RunTrace::default();
        trace.push(snapshot(0));
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"best_position\":5.0"));
    }
}
