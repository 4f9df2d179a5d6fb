//! Global mutual exclusion for the tabular store.
//!
//! The remote store accepts one writer at a time: every push/pull
//! acquires this lock with a bounded wait and fails with a structured
//! error when it cannot. Callers decide whether to retry.

use std::sync::{Mutex, MutexGuard, TryLockError};
use std::time::{Duration, Instant};

use crate::sheets::SheetError;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

pub struct SheetLock<S> {
    inner: Mutex<S>,
    timeout: Duration,
}

impl<S> SheetLock<S> {
    /// Wraps a sheet store with the default 10 second bounded wait.
    pub fn new(store: S) -> Self {
        Self::with_timeout(store, Duration::from_secs(10))
    }

    pub fn with_timeout(store: S, timeout: Duration) -> Self {
        Self {
            inner: Mutex::new(store),
            timeout,
        }
    }

    /// Acquires the store, polling until the bounded wait elapses.
    pub fn acquire(&self) -> Result<MutexGuard<'_, S>, SheetError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match self.inner.try_lock() {
                Ok(guard) => return Ok(guard),
                // Sheet writes are idempotent full replacements, so a
                // panic mid-write poisons nothing worth keeping.
                Err(TryLockError::Poisoned(poisoned)) => return Ok(poisoned.into_inner()),
                Err(TryLockError::WouldBlock) => {
                    if Instant::now() >= deadline {
                        return Err(SheetError::LockTimeout(self.timeout));
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}
