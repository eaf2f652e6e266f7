//! Time sources for cache freshness checks

#[cfg(test)]
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Supplies the current time in UNIX epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to
///
/// Lets tests step past a TTL without sleeping.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now_millis: AtomicI64,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now_millis: AtomicI64::new(start_millis),
        }
    }

    /// Moves the clock forward by `secs` seconds
    pub fn advance_secs(&self, secs: i64) {
        self.now_millis.fetch_add(secs * 1000, Ordering::SeqCst);
    }

    /// Jumps to an absolute time
    pub fn set_millis(&self, millis: i64) {
        self.now_millis.store(millis, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now_millis.load(Ordering::SeqCst)
    }
}
