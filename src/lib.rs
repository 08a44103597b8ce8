//! Particle swarm optimization for scalar objective functions.
//!
//! This library implements the canonical particle swarm optimization (PSO)
//! scheme over a one-dimensional search space, including:
//! - The `Particle` state representation and the `SwarmOptimizer` engine
//! - A builder pattern via `SwarmBuilder` for convenient configuration
//! - Observer pattern for monitoring optimization progress
//! - A read-only iteration trace that external consumers (reporting or a
//!   visualization layer) can buffer and replay
//!
//! A swarm of candidate solutions moves through the search space according to
//! the following equations:
//!
//! v_i(t+1) = w * v_i(t) + c1 * r1 * (p_i - x_i(t)) + c2 * r2 * (g - x_i(t))
//! x_i(t+1) = x_i(t) + v_i(t+1)
//!
//! where:
//! - v_i(t) is the velocity of particle i at time t
//! - x_i(t) is the position of particle i at time t
//! - p_i is the best position found by particle i
//! - g is the best position found by the entire swarm
//! - r1 and r2 are random numbers between 0 and 1
//! - c1 and c2 are the cognitive and social parameters, respectively
//! - w is the inertia weight
//!
//! The optimizer always maximizes the supplied objective; wrap a
//! minimization function in [`objective::Minimize`] to flip the convention
//! at the boundary.

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::benchmarks::*;
    pub use crate::error::*;
    pub use crate::objective::*;
    pub use crate::observer::*;
    pub use crate::particle::*;
    pub use crate::report::*;
    pub use crate::swarm::*;
    pub use crate::trace::*;
}

/// Benchmark objective functions
pub mod benchmarks;
/// Error types for optimization failures
pub mod error;
/// Objective function trait and adapters
pub mod objective;
/// Observers for monitoring optimization progress
pub mod observer;
/// Particle state representation
pub mod particle;
/// Optimization result reporting
pub mod report;
/// The swarm optimizer and its configuration builder
pub mod swarm;
/// Iteration trace and per-iteration snapshots
pub mod trace;
