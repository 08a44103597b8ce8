use thiserror::Error;

use crate::objective::ObjectiveError;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("swarm must contain at least one particle")]
    EmptySwarm,
    #[error("invalid sampling bounds [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("{name} coefficient must be non-negative, got {value}")]
    NegativeCoefficient { name: &'static str, value: f64 },
    #[error("optimizer must be initialized before stepping")]
    NotInitialized,
    #[error("failed to evaluate objective at position {position}")]
    ObjectiveEvaluation {
        position: f64,
        #[source]
        source: ObjectiveError,
    },
}
