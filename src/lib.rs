// Fri Oct 16 2026 - Alex

//! Background execution of long-running iterative algorithms.
//!
//! An [`AsyncTask`] takes an [`Algorithm`], either built through an
//! [`AlgorithmFactory`] from an [`AlgorithmConfig`] or handed in by the
//! caller, runs it on a worker thread, and lets the caller poll with a bounded
//! wait or request a cooperative abort.

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod ui;
pub mod utils;

pub use algorithm::{AbortSignal, Algorithm, AlgorithmConfig, AlgorithmFactory, AlgorithmRegistry, DelayAlgorithm};
pub use config::{ConfigError, RunnerConfig};
pub use engine::{AsyncTask, Ownership, RunReport, RunnerBuilder, TaskError, TaskRunner, TaskState, WorkerHandle};
