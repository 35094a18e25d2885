// Fri Oct 16 2026 - Alex

use crate::algorithm::{AbortSignal, Algorithm, AlgorithmConfig};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

const DEFAULT_ITERATIONS: u32 = 10;
const DEFAULT_ITERATION_MS: u64 = 10;
const MAX_ITERATION_MS: u64 = 3_600_000;

// Abort is consumed when honored, so one sent before the run starts still stops it.
#[derive(Debug)]
pub struct DelayAlgorithm {
    initialized: bool,
    iterations: u32,
    iteration_delay: Duration,
    completed: AtomicU32,
    aborted: AtomicBool,
    abort: AbortSignal,
}

impl DelayAlgorithm {
    pub const TYPE: &'static str = "Delay";

    pub fn new() -> Self {
        Self {
            initialized: false,
            iterations: DEFAULT_ITERATIONS,
            iteration_delay: Duration::from_millis(DEFAULT_ITERATION_MS),
            completed: AtomicU32::new(0),
            aborted: AtomicBool::new(false),
            abort: AbortSignal::new(),
        }
    }

    pub fn completed_iterations(&self) -> u32 {
        self.completed.load(Ordering::Acquire)
    }

    pub fn was_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    pub fn iteration_delay(&self) -> Duration {
        self.iteration_delay
    }
}

impl Default for DelayAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for DelayAlgorithm {
    fn initialize(&mut self, config: &AlgorithmConfig) -> bool {
        self.initialized = false;

        let iterations = config.option_u64("iterations").unwrap_or(DEFAULT_ITERATIONS as u64);
        let iteration_ms = config.option_u64("iteration_ms").unwrap_or(DEFAULT_ITERATION_MS);

        if iterations > u32::MAX as u64 || iteration_ms > MAX_ITERATION_MS {
            log::warn!(
                "Delay: rejecting iterations={} iteration_ms={}",
                iterations,
                iteration_ms
            );
            return false;
        }

        self.iterations = iterations as u32;
        self.iteration_delay = Duration::from_millis(iteration_ms);
        self.completed.store(0, Ordering::Release);
        self.aborted.store(false, Ordering::Release);
        self.abort.reset();
        self.initialized = true;
        true
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn run(&self, iterations: u32) {
        let target = if iterations == 0 { self.iterations } else { iterations };

        self.completed.store(0, Ordering::Release);
        self.aborted.store(false, Ordering::Release);

        for _ in 0..target {
            if self.abort.reset() {
                self.aborted.store(true, Ordering::Release);
                log::debug!("Delay: aborted after {} iterations", self.completed_iterations());
                return;
            }

            thread::sleep(self.iteration_delay);
            self.completed.fetch_add(1, Ordering::AcqRel);
        }
    }

    fn signal_abort(&self) {
        self.abort.signal();
    }

    fn description(&self) -> String {
        Self::TYPE.to_string()
    }

    fn information(&self) -> IndexMap<String, Value> {
        let mut info = IndexMap::new();
        info.insert("completed_iterations".to_string(), Value::from(self.completed_iterations()));
        info.insert("aborted".to_string(), Value::from(self.was_aborted()));
        info.insert(
            "iteration_ms".to_string(),
            Value::from(self.iteration_delay.as_millis() as u64),
        );
        info
    }
}
