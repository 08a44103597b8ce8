//! Objective function contract and adapters.
//!
//! The optimizer treats the objective as an opaque callable mapping a
//! position to a fitness value and always maximizes it. Minimization
//! problems are adapted by negation at this boundary, never inside the
//! iteration engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectiveError {
    /// Error raised by a user-supplied objective that cannot produce a value
    #[error("{0}")]
    Evaluation(String),
    /// Error indicating the queried position lies outside the objective's domain
    #[error("position {0} is outside the objective's domain")]
    OutOfDomain(f64),
}

/// Defines a scalar objective function for the swarm optimizer.
///
/// Implementations must be pure: no side effects, no internal randomness,
/// and the same fitness for the same position. The optimizer relies on this
/// to keep its traces reproducible and its best records consistent.
pub trait ObjectiveFunction {
    /// Evaluates the objective at the given position.
    ///
    /// # Arguments
    /// * `position` - The search-space coordinate to evaluate
    ///
    /// # Returns
    /// * `Result<f64, ObjectiveError>` - The fitness value or an error
    fn evaluate(&self, position: f64) -> Result<f64, ObjectiveError>;
}

impl<F> ObjectiveFunction for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, position: f64) -> Result<f64, ObjectiveError> {
        Ok(self(position))
    }
}

/// Adapts a minimization objective to the optimizer's maximization
/// convention by negating its value.
#[derive(Debug, Clone, Copy)]
pub struct Minimize<O>(pub O);

impl<O> ObjectiveFunction for Minimize<O>
where
    O: ObjectiveFunction,
{
    fn evaluate(&self, position: f64) -> Result<f64, ObjectiveError> {
        Ok(-self.0.evaluate(position)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_objective() {
        let objective = |x: f64| x * 2.0;
        assert_eq!(objective.evaluate(3.0).unwrap(), 6.0);
    }

    #[test]
    fn test_minimize_negates() {
        let objective = Minimize(|x: f64| (x - 3.0).powi(2));
        assert_eq!(objective.evaluate(5.0).unwrap(), -4.0);
        assert_eq!(objective.evaluate(3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_fallible_objective() {
        struct HalfLine;
        impl ObjectiveFunction for HalfLine {
            fn evaluate(&self, position: f64) -> Result<f64, ObjectiveError> {
                if position < 0.0 {
                    return Err(ObjectiveError::OutOfDomain(position));
                }
                Ok(position.sqrt())
            }
        }

        assert!(HalfLine.evaluate(4.0).is_ok());
        assert!(matches!(
            HalfLine.evaluate(-1.0),
            Err(ObjectiveError::OutOfDomain(_))
        ));
    }
}
