// Fri Oct 16 2026 - Alex

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct AbortSignal {
    flag: AtomicBool,
}

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_signalled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clears the flag and reports whether it was raised.
    pub fn reset(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_signal_and_reset() {
        let signal = AbortSignal::new();
        assert!(!signal.is_signalled());

        signal.signal();
        assert!(signal.is_signalled());

        assert!(signal.reset());
        assert!(!signal.is_signalled());
        assert!(!signal.reset());
    }

    #[test]
    fn test_signal_visible_across_threads() {
        let signal = Arc::new(AbortSignal::new());
        let remote = signal.clone();

        thread::spawn(move || remote.signal()).join().unwrap();

        assert!(signal.is_signalled());
    }
}
