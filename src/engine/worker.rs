// Fri Oct 16 2026 - Alex

use parking_lot::{Condvar, Mutex};
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

// A timed-out join leaves the handle untouched; dropping it joins.
pub trait WorkerHandle: Sized + Send {
    fn spawn<F>(name: &str, work: F) -> io::Result<Self>
    where
        F: FnOnce() + Send + 'static;

    fn timed_join(&mut self, timeout: Duration) -> bool;

    fn blocking_join(self);

    fn is_finished(&self) -> bool;
}

#[cfg(not(feature = "mpsc-worker"))]
pub type DefaultWorker = ThreadWorker;

#[cfg(feature = "mpsc-worker")]
pub type DefaultWorker = ChannelWorker;

fn builder(name: &str) -> io::Result<thread::Builder> {
    if name.contains('\0') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("worker name {:?} contains a NUL byte", name),
        ));
    }
    Ok(thread::Builder::new().name(name.to_string()))
}

fn reap(name: &str, handle: JoinHandle<()>) {
    if handle.join().is_err() {
        log::warn!("Worker {} panicked inside the algorithm run", name);
    }
}

struct Latch {
    done: Mutex<bool>,
    cv: Condvar,
}

impl Latch {
    fn new() -> Self {
        Self {
            done: Mutex::new(false),
            cv: Condvar::new(),
        }
    }

    fn release(&self) {
        *self.done.lock() = true;
        self.cv.notify_all();
    }

    fn is_released(&self) -> bool {
        *self.done.lock()
    }

    fn wait_for(&self, timeout: Duration) -> bool {
        let mut done = self.done.lock();

        match Instant::now().checked_add(timeout) {
            Some(deadline) => {
                while !*done {
                    if self.cv.wait_until(&mut done, deadline).timed_out() {
                        break;
                    }
                }
            }
            None => {
                while !*done {
                    self.cv.wait(&mut done);
                }
            }
        }

        *done
    }
}

// Releases the latch on normal return and on unwind alike.
struct LatchGuard(Arc<Latch>);

impl Drop for LatchGuard {
    fn drop(&mut self) {
        self.0.release();
    }
}

pub struct ThreadWorker {
    name: String,
    handle: Option<JoinHandle<()>>,
    latch: Arc<Latch>,
}

impl WorkerHandle for ThreadWorker {
    fn spawn<F>(name: &str, work: F) -> io::Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let latch = Arc::new(Latch::new());
        let guard = LatchGuard(latch.clone());

        let handle = builder(name)?
            .spawn(move || {
                let _guard = guard;
                work();
            })?;

        Ok(Self {
            name: name.to_string(),
            handle: Some(handle),
            latch,
        })
    }

    fn timed_join(&mut self, timeout: Duration) -> bool {
        if self.handle.is_none() {
            return true;
        }

        if !self.latch.wait_for(timeout) {
            return false;
        }

        if let Some(handle) = self.handle.take() {
            reap(&self.name, handle);
        }
        true
    }

    fn blocking_join(mut self) {
        if let Some(handle) = self.handle.take() {
            reap(&self.name, handle);
        }
    }

    fn is_finished(&self) -> bool {
        self.latch.is_released()
    }
}

impl Drop for ThreadWorker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            reap(&self.name, handle);
        }
    }
}

// Disconnected means the worker unwound without sending.
pub struct ChannelWorker {
    name: String,
    handle: Option<JoinHandle<()>>,
    done_rx: Receiver<()>,
}

impl WorkerHandle for ChannelWorker {
    fn spawn<F>(name: &str, work: F) -> io::Result<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let (done_tx, done_rx) = mpsc::channel();

        let handle = builder(name)?
            .spawn(move || {
                work();
                let _ = done_tx.send(());
            })?;

        Ok(Self {
            name: name.to_string(),
            handle: Some(handle),
            done_rx,
        })
    }

    fn timed_join(&mut self, timeout: Duration) -> bool {
        if self.handle.is_none() {
            return true;
        }

        match self.done_rx.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                if let Some(handle) = self.handle.take() {
                    reap(&self.name, handle);
                }
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
        }
    }

    fn blocking_join(mut self) {
        if let Some(handle) = self.handle.take() {
            reap(&self.name, handle);
        }
    }

    fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for ChannelWorker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            reap(&self.name, handle);
        }
    }
}
