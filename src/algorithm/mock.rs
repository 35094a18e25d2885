// Fri Oct 16 2026 - Alex

use crate::algorithm::{AbortSignal, Algorithm, AlgorithmConfig, AlgorithmFactory};
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub(crate) struct MockProbe {
    pub created: AtomicUsize,
    pub drops: AtomicUsize,
    pub live: AtomicUsize,
    pub max_live: AtomicUsize,
    pub runs: AtomicUsize,
    pub aborts: AtomicUsize,
    pub completed: AtomicU32,
    pub last_requested: AtomicU32,
    gate_open: Mutex<bool>,
    gate_cv: Condvar,
}

impl MockProbe {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::with_gate(true))
    }

    // Runs block until open_gate or an abort.
    pub fn gated() -> Arc<Self> {
        Arc::new(Self::with_gate(false))
    }

    fn with_gate(open: bool) -> Self {
        Self {
            created: AtomicUsize::new(0),
            drops: AtomicUsize::new(0),
            live: AtomicUsize::new(0),
            max_live: AtomicUsize::new(0),
            runs: AtomicUsize::new(0),
            aborts: AtomicUsize::new(0),
            completed: AtomicU32::new(0),
            last_requested: AtomicU32::new(0),
            gate_open: Mutex::new(open),
            gate_cv: Condvar::new(),
        }
    }

    pub fn open_gate(&self) {
        *self.gate_open.lock() = true;
        self.gate_cv.notify_all();
    }

    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    pub fn aborts(&self) -> usize {
        self.aborts.load(Ordering::SeqCst)
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> u32 {
        self.completed.load(Ordering::SeqCst)
    }

    fn wait_for_gate(&self, abort: &AbortSignal) {
        let mut open = self.gate_open.lock();
        while !*open && !abort.is_signalled() {
            self.gate_cv.wait_for(&mut open, Duration::from_millis(5));
        }
    }
}

pub(crate) struct MockAlgorithm {
    probe: Arc<MockProbe>,
    accept: bool,
    initialized: bool,
    natural_iterations: u32,
    delay: Duration,
    abort: AbortSignal,
}

impl MockAlgorithm {
    pub fn new() -> Self {
        Self::with_probe(MockProbe::new())
    }

    pub fn rejecting() -> Self {
        let mut algorithm = Self::new();
        algorithm.accept = false;
        algorithm
    }

    pub fn with_probe(probe: Arc<MockProbe>) -> Self {
        probe.created.fetch_add(1, Ordering::SeqCst);
        let live = probe.live.fetch_add(1, Ordering::SeqCst) + 1;
        probe.max_live.fetch_max(live, Ordering::SeqCst);

        Self {
            probe,
            accept: true,
            initialized: false,
            natural_iterations: 10,
            delay: Duration::from_millis(1),
            abort: AbortSignal::new(),
        }
    }

    pub fn ready(probe: Arc<MockProbe>, delay: Duration) -> Self {
        let mut algorithm = Self::with_probe(probe);
        algorithm.delay = delay;
        algorithm.initialized = true;
        algorithm
    }
}

impl Drop for MockAlgorithm {
    fn drop(&mut self) {
        self.probe.drops.fetch_add(1, Ordering::SeqCst);
        self.probe.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Algorithm for MockAlgorithm {
    fn initialize(&mut self, config: &AlgorithmConfig) -> bool {
        if let Some(ms) = config.option_u64("delay_ms") {
            self.delay = Duration::from_millis(ms);
        }
        self.initialized = self.accept;
        self.initialized
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn run(&self, iterations: u32) {
        let target = if iterations == 0 { self.natural_iterations } else { iterations };
        self.probe.runs.fetch_add(1, Ordering::SeqCst);
        self.probe.last_requested.store(iterations, Ordering::SeqCst);
        self.probe.completed.store(0, Ordering::SeqCst);

        self.probe.wait_for_gate(&self.abort);

        for _ in 0..target {
            if self.abort.reset() {
                return;
            }
            std::thread::sleep(self.delay);
            self.probe.completed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn signal_abort(&self) {
        self.probe.aborts.fetch_add(1, Ordering::SeqCst);
        self.abort.signal();
        self.probe.gate_cv.notify_all();
    }

    fn description(&self) -> String {
        "Mock".to_string()
    }
}

// "Mock" accepts, "Reject" fails initialization, anything else is None.
pub(crate) struct CountingFactory {
    pub probe: Arc<MockProbe>,
    pub calls: AtomicUsize,
}

impl CountingFactory {
    pub fn new(probe: Arc<MockProbe>) -> Arc<Self> {
        Arc::new(Self {
            probe,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AlgorithmFactory for CountingFactory {
    fn create(&self, config: &AlgorithmConfig) -> Option<Box<dyn Algorithm>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut algorithm = match config.algorithm_type() {
            "Mock" => MockAlgorithm::with_probe(self.probe.clone()),
            "Reject" => {
                let mut algorithm = MockAlgorithm::with_probe(self.probe.clone());
                algorithm.accept = false;
                algorithm
            }
            _ => return None,
        };

        algorithm.initialize(config);
        Some(Box::new(algorithm))
    }
}
