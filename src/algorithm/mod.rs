// Fri Oct 16 2026 - Alex

pub mod abort;
pub mod builtin;
pub mod config;
pub mod factory;

#[cfg(test)]
pub(crate) mod mock;

pub use abort::AbortSignal;
pub use builtin::DelayAlgorithm;
pub use config::AlgorithmConfig;
pub use factory::{AlgorithmFactory, AlgorithmRegistry};

use indexmap::IndexMap;
use serde_json::Value;

/// `run` and `signal_abort` take `&self`; an abort arrives while another thread is inside `run`.
pub trait Algorithm: Send + Sync {
    fn initialize(&mut self, config: &AlgorithmConfig) -> bool;

    fn is_initialized(&self) -> bool;

    /// Performs `iterations` iterations, or runs to natural completion when `0`.
    fn run(&self, iterations: u32);

    /// Requests an early return from `run`. Must never block.
    fn signal_abort(&self);

    fn description(&self) -> String {
        "Algorithm".to_string()
    }

    fn information(&self) -> IndexMap<String, Value> {
        IndexMap::new()
    }
}
