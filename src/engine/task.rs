// Fri Oct 16 2026 - Alex

use crate::algorithm::{Algorithm, AlgorithmConfig, AlgorithmFactory};
use crate::engine::error::TaskError;
use crate::engine::state::{AlgorithmSlot, Ownership, TaskState};
use crate::engine::worker::{DefaultWorker, WorkerHandle};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_WORKER_NAME: &str = "algo-worker";

/// Runs one algorithm on a background worker. At most one worker is live,
/// and it is joined before the held algorithm is replaced or dropped.
pub struct AsyncTask<W: WorkerHandle = DefaultWorker> {
    factory: Option<Arc<dyn AlgorithmFactory>>,
    slot: Option<AlgorithmSlot>,
    state: TaskState,
    worker: Option<W>,
    requested_iterations: Option<u32>,
    worker_name: String,
}

impl AsyncTask {
    pub fn new() -> Self {
        Self::empty()
    }

    pub fn with_factory(factory: Arc<dyn AlgorithmFactory>) -> Self {
        let mut task = Self::empty();
        task.set_factory(factory);
        task
    }

    pub fn from_algorithm(algorithm: Arc<dyn Algorithm>) -> Self {
        let mut task = Self::empty();
        task.initialize_with(algorithm);
        task
    }
}

impl Default for AsyncTask {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WorkerHandle> AsyncTask<W> {
    pub fn empty() -> Self {
        Self {
            factory: None,
            slot: None,
            state: TaskState::Uninitialized,
            worker: None,
            requested_iterations: None,
            worker_name: DEFAULT_WORKER_NAME.to_string(),
        }
    }

    pub fn with_worker_name(mut self, name: &str) -> Self {
        self.worker_name = name.to_string();
        self
    }

    pub fn set_factory(&mut self, factory: Arc<dyn AlgorithmFactory>) {
        self.factory = Some(factory);
    }

    // Failure leaves the task Uninitialized; the previous algorithm is already gone.
    pub fn initialize(&mut self, config: &AlgorithmConfig) -> Result<(), TaskError> {
        self.release();

        let factory = self.factory.clone().ok_or(TaskError::NoFactory)?;
        let algorithm_type = config.algorithm_type().to_string();

        let algorithm = factory
            .create(config)
            .ok_or_else(|| TaskError::UnknownAlgorithm(algorithm_type.clone()))?;

        if !algorithm.is_initialized() {
            // We built it, so it is ours to discard.
            drop(algorithm);
            return Err(TaskError::AlgorithmRejected(algorithm_type));
        }

        log::debug!("Task adopted owned algorithm {}", algorithm_type);
        self.slot = Some(AlgorithmSlot::owned(algorithm));
        self.state = TaskState::Initialized;
        Ok(())
    }

    pub fn initialize_with(&mut self, algorithm: Arc<dyn Algorithm>) {
        self.release();

        log::debug!("Task adopted borrowed algorithm {}", algorithm.description());
        self.slot = Some(AlgorithmSlot::borrowed(algorithm));
        self.state = TaskState::Initialized;
    }

    /// Returns `Ok(false)` and does nothing when no algorithm is held.
    pub fn run(&mut self, iterations: u32) -> Result<bool, TaskError> {
        let algorithm = match &self.slot {
            Some(slot) => slot.share(),
            None => {
                log::trace!("Ignoring run on an uninitialized task");
                return Ok(false);
            }
        };

        if let Some(worker) = self.worker.as_mut() {
            if !worker.timed_join(Duration::ZERO) {
                return Err(TaskError::AlreadyDispatched);
            }
            self.worker = None;
        }

        let worker = W::spawn(&self.worker_name, move || algorithm.run(iterations))?;

        log::debug!("Dispatched {} for {} iterations", self.worker_name, iterations);
        self.worker = Some(worker);
        self.requested_iterations = Some(iterations);
        self.state = TaskState::Dispatched;
        Ok(true)
    }

    /// True exactly once per dispatch, when the worker is reclaimed.
    pub fn timed_join(&mut self, timeout: Duration) -> bool {
        let worker = match self.worker.as_mut() {
            Some(worker) => worker,
            None => return false,
        };

        if !worker.timed_join(timeout) {
            log::trace!("{} still running after {:?}", self.worker_name, timeout);
            return false;
        }

        self.worker = None;
        self.finish_dispatch();
        true
    }

    pub fn join(&mut self) -> bool {
        match self.worker.take() {
            Some(worker) => {
                log::debug!("Joining {}", self.worker_name);
                worker.blocking_join();
                self.finish_dispatch();
                true
            }
            None => false,
        }
    }

    pub fn signal_abort(&self) {
        if let Some(slot) = &self.slot {
            log::debug!("Signalling abort to {}", slot.algorithm().description());
            slot.algorithm().signal_abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        match &self.worker {
            Some(worker) => worker.is_finished(),
            None => self.state == TaskState::Completed,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn ownership(&self) -> Option<Ownership> {
        self.slot.as_ref().map(|s| s.ownership())
    }

    pub fn requested_iterations(&self) -> Option<u32> {
        self.requested_iterations
    }

    pub fn algorithm(&self) -> Option<&dyn Algorithm> {
        self.slot.as_ref().map(|s| s.algorithm())
    }

    pub fn worker_name(&self) -> &str {
        &self.worker_name
    }

    fn finish_dispatch(&mut self) {
        self.requested_iterations = None;
        self.state = TaskState::Completed;
    }

    fn release(&mut self) {
        self.join();

        if let Some(slot) = self.slot.take() {
            slot.release();
        }
        self.state = TaskState::Uninitialized;
        self.requested_iterations = None;
    }
}

impl<W: WorkerHandle> Drop for AsyncTask<W> {
    fn drop(&mut self) {
        self.release();
    }
}
