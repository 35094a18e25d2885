// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("No algorithm factory configured")]
    NoFactory,
    #[error("Unknown algorithm type: {0}")]
    UnknownAlgorithm(String),
    #[error("Algorithm {0} failed to initialize")]
    AlgorithmRejected(String),
    #[error("Task is not initialized")]
    NotInitialized,
    #[error("A worker is still running for this task")]
    AlreadyDispatched,
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
