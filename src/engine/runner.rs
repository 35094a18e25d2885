// Fri Oct 16 2026 - Alex

use crate::algorithm::{AlgorithmConfig, AlgorithmFactory, AlgorithmRegistry};
use crate::config::RunnerConfig;
use crate::engine::error::TaskError;
use crate::engine::task::AsyncTask;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct PollEvent {
    pub polls: u64,
    pub elapsed: Duration,
    pub abort_requested: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: String,
    pub iterations_requested: u32,
    pub polls: u64,
    pub elapsed_ms: u64,
    pub abort_requested: bool,
    pub information: IndexMap<String, Value>,
}

/// Polls an initialized task to completion, requesting abort at most once.
pub struct TaskRunner {
    task: AsyncTask,
    iterations: u32,
    poll_interval: Duration,
    deadline: Option<Duration>,
    stop_flag: Arc<AtomicBool>,
}

impl TaskRunner {
    pub fn new(task: AsyncTask, config: &RunnerConfig) -> Self {
        Self {
            task,
            iterations: config.default_iterations,
            poll_interval: config.poll_interval(),
            deadline: config.deadline(),
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    // Lowered once the run it stopped has joined.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    pub fn run(&mut self) -> Result<RunReport, TaskError> {
        self.run_with(|_| {})
    }

    pub fn run_with<F>(&mut self, mut observer: F) -> Result<RunReport, TaskError>
    where
        F: FnMut(&PollEvent),
    {
        let start = Instant::now();

        if !self.task.run(self.iterations)? {
            return Err(TaskError::NotInitialized);
        }

        let mut polls = 0u64;
        let mut abort_requested = false;

        if self.stop_flag.load(Ordering::SeqCst) {
            log::info!("Stop requested before dispatch, aborting");
            self.task.signal_abort();
            abort_requested = true;
        }

        while !self.task.timed_join(self.poll_interval) {
            polls += 1;
            let elapsed = start.elapsed();

            if !abort_requested && self.should_abort(elapsed) {
                log::info!("Requesting abort after {:?}", elapsed);
                self.task.signal_abort();
                abort_requested = true;
            }

            observer(&PollEvent {
                polls,
                elapsed,
                abort_requested,
            });
        }

        self.stop_flag.store(false, Ordering::SeqCst);

        let elapsed = start.elapsed();
        let (algorithm, information) = match self.task.algorithm() {
            Some(algorithm) => (algorithm.description(), algorithm.information()),
            None => (String::new(), IndexMap::new()),
        };

        log::debug!("{} joined after {} polls in {:?}", algorithm, polls, elapsed);

        Ok(RunReport {
            algorithm,
            iterations_requested: self.iterations,
            polls,
            elapsed_ms: elapsed.as_millis() as u64,
            abort_requested,
            information,
        })
    }

    fn should_abort(&self, elapsed: Duration) -> bool {
        self.stop_flag.load(Ordering::SeqCst)
            || self.deadline.map_or(false, |deadline| elapsed >= deadline)
    }

    pub fn task(&self) -> &AsyncTask {
        &self.task
    }

    pub fn into_task(self) -> AsyncTask {
        self.task
    }
}

pub struct RunnerBuilder {
    config: Option<RunnerConfig>,
    factory: Option<Arc<dyn AlgorithmFactory>>,
    algorithm: Option<AlgorithmConfig>,
}

impl RunnerBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            factory: None,
            algorithm: None,
        }
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_factory(mut self, factory: Arc<dyn AlgorithmFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_algorithm(mut self, algorithm: AlgorithmConfig) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn build(self) -> Result<TaskRunner, TaskError> {
        let algorithm = self.algorithm
            .ok_or_else(|| TaskError::InvalidState("Algorithm config not set".to_string()))?;

        let config = self.config.unwrap_or_default();
        config.validate().map_err(TaskError::InvalidState)?;

        let factory = self.factory
            .unwrap_or_else(|| Arc::new(AlgorithmRegistry::with_builtins()) as Arc<dyn AlgorithmFactory>);

        let mut task = AsyncTask::with_factory(factory).with_worker_name(&config.worker_name);
        task.initialize(&algorithm)?;

        Ok(TaskRunner::new(task, &config))
    }
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
