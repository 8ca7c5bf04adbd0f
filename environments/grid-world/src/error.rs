use rand_distr::WeightedError;
use thiserror::Error;

/// Errors that can occur while building or querying a grid world.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Grid size {0} exceeds the supported maximum")]
    InvalidDimensions(usize),
    #[error("Position out of bounds: ({0}, {1})")]
    OutOfBounds(i32, i32),
    #[error("Position ({0}, {1}) is a wall")]
    Wall(i32, i32),
    #[error("No open cell to spawn in")]
    NoOpenCell,
    #[error("No open cell found after {0} spawn attempts")]
    SpawnExhausted(usize),
    #[error("Unknown action `{0}`")]
    UnknownAction(String),
    #[error("Invalid transition weights: {0}")]
    Weights(#[from] WeightedError),
}
