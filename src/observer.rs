//! Observers for monitoring optimization progress.

use log::info;

use crate::trace::IterationSnapshot;

/// Receives read-only snapshots as the optimizer progresses.
///
/// Observers are registered on the optimizer and notified once after
/// initialization and once after every completed iteration pass. They see
/// the same snapshots that land in the run trace.
pub trait SwarmObserver {
    /// Called once after the swarm has been initialized and seeded.
    fn observe_init(&mut self, _snapshot: &IterationSnapshot) {}

    /// Called after each completed iteration pass.
    fn observe_iter(&mut self, _snapshot: &IterationSnapshot) {}
}

/// An observer that forwards every iteration snapshot to a callback function.
///
/// The callback is called after each iteration with the snapshot recorded
/// for that iteration, which carries the swarm-best record and all particle
/// positions.
pub struct CallbackObserver {
    /// The callback function to be executed after each iteration.
    pub callback: Box<dyn Fn(&IterationSnapshot) + Send>,
}

impl SwarmObserver for CallbackObserver {
    fn observe_iter(&mut self, snapshot: &IterationSnapshot) {
        (self.callback)(snapshot);
    }
}

/// An observer that reports per-iteration progress through the `log` crate.
///
/// Emits one `info` record per iteration with the iteration index and the
/// current swarm-best fitness and position, for text-console consumers.
#[derive(Debug, Default)]
pub struct LogObserver;

impl SwarmObserver for LogObserver {
    fn observe_init(&mut self, snapshot: &IterationSnapshot) {
        info!(
            "initialized swarm of {} particles: best fitness {} at position {}",
            snapshot.positions.len(),
            snapshot.best_fitness,
            snapshot.best_position
        );
    }

    fn observe_iter(&mut self, snapshot: &IterationSnapshot) {
        info!(
            "iteration {}: swarm best fitness {} at position {}",
            snapshot.iteration, snapshot.best_fitness, snapshot.best_position
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn test_callback_observer_forwards_snapshots() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let mut observer = CallbackObserver {
            callback: Box::new(move |snapshot| {
                counter.fetch_add(snapshot.iteration, Ordering::SeqCst);
            }),
        };

        let snapshot = IterationSnapshot {
            iteration: 3,
            positions: array![1.0],
            personal_best_positions: array![1.0],
            best_position: 1.0,
            best_fitness: 0.0,
        };
        observer.observe_iter(&snapshot);
        observer.observe_iter(&snapshot);

        assert_eq!(seen.load(Ordering::SeqCst), 6);
    }
}
