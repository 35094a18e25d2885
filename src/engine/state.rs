// Fri Oct 16 2026 - Alex

use crate::algorithm::Algorithm;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Uninitialized,
    Initialized,
    Dispatched,
    Completed,
}

impl TaskState {
    pub fn name(&self) -> &'static str {
        match self {
            TaskState::Uninitialized => "uninitialized",
            TaskState::Initialized => "initialized",
            TaskState::Dispatched => "dispatched",
            TaskState::Completed => "completed",
        }
    }
}

impl Default for TaskState {
    fn default() -> Self {
        TaskState::Uninitialized
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owned,
    Borrowed,
}

// An Owned slot is the only strong reference outside a live worker.
pub(crate) struct AlgorithmSlot {
    algorithm: Arc<dyn Algorithm>,
    ownership: Ownership,
}

impl AlgorithmSlot {
    pub fn owned(algorithm: Box<dyn Algorithm>) -> Self {
        Self {
            algorithm: Arc::from(algorithm),
            ownership: Ownership::Owned,
        }
    }

    pub fn borrowed(algorithm: Arc<dyn Algorithm>) -> Self {
        Self {
            algorithm,
            ownership: Ownership::Borrowed,
        }
    }

    pub fn algorithm(&self) -> &dyn Algorithm {
        self.algorithm.as_ref()
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn share(&self) -> Arc<dyn Algorithm> {
        self.algorithm.clone()
    }

    // Only once no worker holds a shared reference.
    pub fn release(self) {
        let description = self.algorithm.description();

        match self.ownership {
            Ownership::Owned => {
                let refs = Arc::strong_count(&self.algorithm);
                if refs > 1 {
                    log::warn!(
                        "Owned algorithm {} still has {} references at release",
                        description,
                        refs - 1
                    );
                }
                log::debug!("Destroying owned algorithm {}", description);
            }
            Ownership::Borrowed => {
                log::debug!("Releasing borrowed algorithm {}", description);
            }
        }
    }
}
