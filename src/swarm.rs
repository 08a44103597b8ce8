//! The swarm optimizer: population ownership, the velocity/position update
//! rule, and personal/global best bookkeeping.
//!
//! The optimizer moves through the states
//! `Uninitialized -> Initialized -> {Stepping}* -> Done`:
//! [`SwarmBuilder::build`] validates the configuration, [`SwarmOptimizer::initialize`]
//! samples and seeds the population, and [`SwarmOptimizer::step`] /
//! [`SwarmOptimizer::run`] advance it. Stepping before initialization fails
//! with [`OptimizeError::NotInitialized`].
//!
//! The whole run is single-threaded and synchronous. The swarm-best record
//! is one owned pair of fields mutated in place during each pass, which
//! gives later particles in a pass visibility of updates made earlier in
//! the same pass. That read-after-write ordering is part of the algorithm's
//! observable behavior, not an accident; a parallel variant would have to
//! freeze the record per pass and would change convergence trajectories.

use log::{debug, info};
use ndarray::Array1;
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};

use crate::{
    error::OptimizeError,
    objective::ObjectiveFunction,
    observer::SwarmObserver,
    particle::Particle,
    report::OptimizationReport,
    trace::{IterationSnapshot, RunTrace},
};

/// Mutable swarm state, present once the optimizer has been initialized.
struct SwarmState {
    /// Population in creation order; the pass order is identical every iteration
    particles: Vec<Particle>,
    /// Best position observed by any particle so far
    best_position: f64,
    /// Best fitness observed by any particle so far
    best_fitness: f64,
    /// Injected random source; seeding it makes traces reproducible
    rng: StdRng,
    /// Completed iteration passes
    iterations: usize,
    /// Objective evaluations performed
    evaluations: usize,
}

impl SwarmState {
    fn snapshot(&self) -> IterationSnapshot {
        IterationSnapshot {
            iteration: self.iterations,
            positions: Array1::from_iter(self.particles.iter().map(|p| p.position)),
            personal_best_positions: Array1::from_iter(
                self.particles.iter().map(|p| p.best_position),
            ),
            best_position: self.best_position,
            best_fitness: self.best_fitness,
        }
    }
}

/// Particle swarm optimizer over a scalar objective.
///
/// The optimizer owns its population, the objective, and the iteration
/// trace. It always maximizes the objective; adapt a minimization problem
/// with [`crate::objective::Minimize`] before building.
///
/// Construct instances through [`SwarmBuilder`].
pub struct SwarmOptimizer<O> {
    objective: O,
    pop_size: usize,
    max_iters: usize,
    lower_bound: f64,
    upper_bound: f64,
    inertia: f64,
    cognitive: f64,
    social: f64,
    seed: Option<u64>,
    state: Option<SwarmState>,
    trace: RunTrace,
    observers: Vec<Box<dyn SwarmObserver>>,
}

impl<O: ObjectiveFunction> SwarmOptimizer<O> {
    /// Registers an observer notified after initialization and after every
    /// completed iteration pass.
    pub fn add_observer(&mut self, observer: Box<dyn SwarmObserver>) {
        self.observers.push(observer);
    }

    /// True once `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// The swarm-best record as `(position, fitness)`, if initialized.
    pub fn best(&self) -> Option<(f64, f64)> {
        self.state
            .as_ref()
            .map(|state| (state.best_position, state.best_fitness))
    }

    /// Read-only view of the snapshots recorded so far.
    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Creates the population and seeds the best records.
    ///
    /// Positions are sampled uniformly at random from the configured bounds
    /// and every particle starts with velocity 0. Each particle is evaluated
    /// once in creation order to seed its personal best; the swarm best is
    /// updated on strict improvement only, so on ties the earlier particle
    /// keeps the record. The initialization state is appended to the trace
    /// as snapshot 0.
    ///
    /// # Errors
    /// Propagates [`OptimizeError::ObjectiveEvaluation`] if the objective
    /// fails for a sampled position; the swarm is then left uninitialized.
    pub fn initialize(&mut self) -> Result<(), OptimizeError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sampler = Uniform::new(self.lower_bound, self.upper_bound);
        let positions = (0..self.pop_size)
            .map(|_| sampler.sample(&mut rng))
            .collect();
        self.initialize_from(positions, rng)
    }

    /// Builds the population from pre-sampled positions and seeds the
    /// personal and swarm best records by evaluating each particle once.
    fn initialize_from(&mut self, positions: Vec<f64>, rng: StdRng) -> Result<(), OptimizeError> {
        let mut particles: Vec<Particle> = positions
            .into_iter()
            .map(|position| Particle::new(position, 0.0))
            .collect();

        // The swarm best before any finite evaluation: fitness -inf with no
        // meaningful position yet. The first strict improvement overwrites
        // both fields together.
        let mut best_position = f64::NAN;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut evaluations = 0;

        for particle in particles.iter_mut() {
            let fitness = self.objective.evaluate(particle.position).map_err(|source| {
                OptimizeError::ObjectiveEvaluation {
                    position: particle.position,
                    source,
                }
            })?;
            evaluations += 1;
            particle.fitness = fitness;
            particle.best_position = particle.position;
            particle.best_fitness = fitness;
            if fitness > best_fitness {
                best_fitness = fitness;
                best_position = particle.position;
            }
        }

        let state = SwarmState {
            particles,
            best_position,
            best_fitness,
            rng,
            iterations: 0,
            evaluations,
        };
        let snapshot = state.snapshot();
        self.state = Some(state);
        for observer in self.observers.iter_mut() {
            observer.observe_init(&snapshot);
        }
        self.trace.push(snapshot);
        Ok(())
    }

    /// Advances the swarm by one full iteration pass.
    ///
    /// For each particle in creation order: draw `r1, r2` uniformly from
    /// `[0, 1)`, update the velocity as
    /// `w * v + c1 * r1 * (pbest - x) + c2 * r2 * (gbest - x)`, move the
    /// particle, re-evaluate it, and refresh the personal and swarm best
    /// records on strict improvement. The swarm-best record is read and
    /// written mid-pass: a particle processed later in the pass attracts
    /// toward a best an earlier particle may have just set.
    ///
    /// Positions and velocities are not clamped. Fitness comparisons use
    /// plain `>`, so a NaN fitness never displaces a best record and
    /// infinities order normally.
    ///
    /// One snapshot is appended to the trace per completed pass.
    ///
    /// # Errors
    /// * [`OptimizeError::NotInitialized`] if called before `initialize`
    /// * [`OptimizeError::ObjectiveEvaluation`] if the objective fails; the
    ///   pass is abandoned mid-way and the run must be considered aborted
    pub fn step(&mut self) -> Result<(), OptimizeError> {
        let state = self.state.as_mut().ok_or(OptimizeError::NotInitialized)?;

        for particle in state.particles.iter_mut() {
            let r1 = state.rng.gen::<f64>();
            let r2 = state.rng.gen::<f64>();
            let velocity = self.inertia * particle.velocity
                + self.cognitive * r1 * (particle.best_position - particle.position)
                + self.social * r2 * (state.best_position - particle.position);
            particle.set_velocity(velocity);
            particle.position += velocity;

            let fitness = self.objective.evaluate(particle.position).map_err(|source| {
                OptimizeError::ObjectiveEvaluation {
                    position: particle.position,
                    source,
                }
            })?;
            particle.fitness = fitness;
            state.evaluations += 1;

            if fitness > particle.best_fitness {
                particle.best_fitness = fitness;
                particle.best_position = particle.position;
            }
            // Visible to the remaining particles in this same pass.
            if fitness > state.best_fitness {
                state.best_fitness = fitness;
                state.best_position = particle.position;
            }
        }

        state.iterations += 1;
        debug!(
            "iteration {}: swarm best fitness {} at position {}",
            state.iterations, state.best_fitness, state.best_position
        );

        let snapshot = state.snapshot();
        for observer in self.observers.iter_mut() {
            observer.observe_iter(&snapshot);
        }
        self.trace.push(snapshot);
        Ok(())
    }

    /// Runs the full fixed-count iteration sequence and returns a report.
    ///
    /// Executes exactly the configured number of passes; there is no
    /// early-stopping or convergence criterion. With zero iterations the
    /// report carries only the initialization snapshot and the swarm best
    /// is the best of the initial random sample.
    ///
    /// # Errors
    /// * [`OptimizeError::NotInitialized`] if called before `initialize`
    /// * Any error raised by an iteration pass
    pub fn run(mut self) -> Result<OptimizationReport, OptimizeError> {
        if self.state.is_none() {
            return Err(OptimizeError::NotInitialized);
        }
        for _ in 0..self.max_iters {
            self.step()?;
        }
        let state = self.state.ok_or(OptimizeError::NotInitialized)?;
        info!(
            "run complete: {} iterations, {} evaluations, best fitness {} at position {}",
            state.iterations, state.evaluations, state.best_fitness, state.best_position
        );
        Ok(OptimizationReport::new(
            state.best_position,
            state.best_fitness,
            state.iterations,
            state.evaluations,
            self.trace,
        ))
    }
}

/// Builder for configuring and constructing `SwarmOptimizer` instances.
///
/// This builder provides a fluent interface for setting up an optimizer
/// with custom parameters and configuration options.
///
/// Default values:
/// - pop_size: 30
/// - max_iters: 100
/// - inertia: 0.8
/// - cognitive: 0.1
/// - social: 0.1
/// - seed: none (entropy)
pub struct SwarmBuilder {
    /// Population size
    pop_size: usize,
    /// Number of iteration passes `run` executes
    max_iters: usize,
    /// Lower bound of the initial sampling interval
    lower_bound: f64,
    /// Upper bound of the initial sampling interval
    upper_bound: f64,
    /// Inertia weight `w`
    inertia: f64,
    /// Cognitive acceleration coefficient `c1`
    cognitive: f64,
    /// Social acceleration coefficient `c2`
    social: f64,
    /// Seed for the random source
    seed: Option<u64>,
}

impl SwarmBuilder {
    /// Creates a new SwarmBuilder with default settings for the given
    /// initial sampling bounds.
    ///
    /// # Arguments
    ///
    /// * `lower_bound` - Lower bound for initial position sampling
    /// * `upper_bound` - Upper bound for initial position sampling
    pub fn default(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            pop_size: 30,
            max_iters: 100,
            lower_bound,
            upper_bound,
            inertia: 0.8,
            cognitive: 0.1,
            social: 0.1,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn pop_size(mut self, pop_size: usize) -> Self {
        self.pop_size = pop_size;
        self
    }

    /// Sets the number of iteration passes executed by `run`.
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the inertia weight `w`.
    pub fn inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    /// Sets the cognitive (personal-best attraction) coefficient `c1`.
    pub fn cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = cognitive;
        self
    }

    /// Sets the social (swarm-best attraction) coefficient `c2`.
    pub fn social(mut self, social: f64) -> Self {
        self.social = social;
        self
    }

    /// Seeds the random source so repeated runs produce bit-identical
    /// traces.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and builds an optimizer owning the
    /// given objective.
    ///
    /// # Errors
    /// Returns a configuration error if the swarm would be empty, the
    /// sampling bounds are not a finite non-empty interval, or any
    /// coefficient is negative. Nothing is silently clamped.
    pub fn build<O: ObjectiveFunction>(
        self,
        objective: O,
    ) -> Result<SwarmOptimizer<O>, OptimizeError> {
        if self.pop_size == 0 {
            return Err(OptimizeError::EmptySwarm);
        }
        if !self.lower_bound.is_finite()
            || !self.upper_bound.is_finite()
            || self.lower_bound >= self.upper_bound
        {
            return Err(OptimizeError::InvalidBounds {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if value < 0.0 {
                return Err(OptimizeError::NegativeCoefficient { name, value });
            }
        }

        Ok(SwarmOptimizer {
            objective,
            pop_size: self.pop_size,
            max_iters: self.max_iters,
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            inertia: self.inertia,
            cognitive: self.cognitive,
            social: self.social,
            seed: self.seed,
            state: None,
            trace: RunTrace::default(),
            observers: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parabola(x: f64) -> f64 {
        -(x - 3.0).powi(2)
    }

    fn identity(x: f64) -> f64 {
        x
    }

    #[test]
    fn test_seeding_in_creation_order() {
        let mut opt = SwarmBuilder::default(-10.0, 10.0)
            .build(parabola as fn(f64) -> f64)
            .unwrap();
        opt.initialize_from(vec![0.0, 5.0, -5.0], StdRng::seed_from_u64(0))
            .unwrap();

        let state = opt.state.as_ref().unwrap();
        assert_eq!(state.particles[0].fitness, -9.0);
        assert_eq!(state.particles[1].fitness, -4.0);
        assert_eq!(state.particles[2].fitness, -64.0);
        assert_eq!(state.particles[1].best_position, 5.0);
        assert_eq!(state.best_position, 5.0);
        assert_eq!(state.best_fitness, -4.0);
        assert_eq!(opt.trace().len(), 1);
    }

    #[test]
    fn test_best_fitness_trends_upward() {
        let mut opt = SwarmBuilder::default(-10.0, 10.0)
            .build(parabola as fn(f64) -> f64)
            .unwrap();
        opt.initialize_from(vec![0.0, 5.0, -5.0], StdRng::seed_from_u64(1))
            .unwrap();

        let mut previous = opt.best().unwrap().1;
        assert_eq!(previous, -4.0);
        for _ in 0..50 {
            opt.step().unwrap();
            let (_, fitness) = opt.best().unwrap();
            assert!(fitness >= previous);
            previous = fitness;
        }
        assert!(previous > -4.0);
    }

    #[test]
    fn test_mid_pass_update_is_visible_to_later_particles() {
        // Particle 0 overtakes the swarm best at the start of the pass;
        // particle 1 sits exactly on the old best position, so any movement
        // proves it attracted toward the record updated earlier in the same
        // pass rather than a snapshot frozen at pass start.
        let mut opt = SwarmBuilder::default(-100.0, 100.0)
            .inertia(1.0)
            .cognitive(0.0)
            .social(1.0)
            .build(identity as fn(f64) -> f64)
            .unwrap();
        opt.initialize_from(vec![10.0, 12.0], StdRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(opt.best().unwrap().0, 12.0);

        opt.state.as_mut().unwrap().particles[0].set_velocity(4.0);
        opt.step().unwrap();

        let state = opt.state.as_ref().unwrap();
        // v0' = 1.0 * 4.0 + r2 * (12 - 10) lands particle 0 in [14, 16).
        assert!(state.particles[0].position >= 14.0);
        assert_eq!(state.best_position, state.particles[0].position);
        assert!(state.particles[1].position > 12.0);
    }
}
