// Fri Oct 16 2026 - Alex

pub mod error;
pub mod runner;
pub mod state;
pub mod task;
pub mod worker;

pub use error::{TaskError, TaskResult};
pub use runner::{PollEvent, RunReport, RunnerBuilder, TaskRunner};
pub use state::{Ownership, TaskState};
pub use task::AsyncTask;
pub use worker::{ChannelWorker, DefaultWorker, ThreadWorker, WorkerHandle};
