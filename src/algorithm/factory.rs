// Fri Oct 16 2026 - Alex

use crate::algorithm::builtin::DelayAlgorithm;
use crate::algorithm::{Algorithm, AlgorithmConfig};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// `None` means nothing was constructed. A rejected instance is still returned.
pub trait AlgorithmFactory: Send + Sync {
    fn create(&self, config: &AlgorithmConfig) -> Option<Box<dyn Algorithm>>;
}

type Constructor = Arc<dyn Fn() -> Box<dyn Algorithm> + Send + Sync>;

pub struct AlgorithmRegistry {
    constructors: RwLock<IndexMap<String, Constructor>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            constructors: RwLock::new(IndexMap::new()),
        }
    }

    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(DelayAlgorithm::TYPE, || Box::new(DelayAlgorithm::new()));
        registry
    }

    pub fn register<F>(&self, name: &str, ctor: F)
    where
        F: Fn() -> Box<dyn Algorithm> + Send + Sync + 'static,
    {
        let previous = self.constructors.write().insert(name.to_string(), Arc::new(ctor));
        if previous.is_some() {
            log::debug!("Replaced algorithm constructor for type {}", name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.read().contains_key(name)
    }

    pub fn types(&self) -> Vec<String> {
        self.constructors.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.constructors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.read().is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmFactory for AlgorithmRegistry {
    fn create(&self, config: &AlgorithmConfig) -> Option<Box<dyn Algorithm>> {
        // Clone the constructor out so a slow `initialize` does not hold the lock.
        let ctor = self.constructors.read().get(config.algorithm_type()).cloned();

        let ctor = match ctor {
            Some(ctor) => ctor,
            None => {
                log::debug!("No algorithm registered for type {}", config.algorithm_type());
                return None;
            }
        };

        let mut algorithm = ctor();
        if !algorithm.initialize(config) {
            log::debug!("Algorithm {} rejected its configuration", config.algorithm_type());
        }

        Some(algorithm)
    }
}
