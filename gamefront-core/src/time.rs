//! Time source abstraction
//!
//! The synchronous engines never read the wall clock directly. They ask a
//! [`Clock`], which is the tokio-aware system clock in production and a
//! manually advanced clock in tests, so timer behavior is deterministic.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Source of the current instant.
pub trait Clock: std::fmt::Debug + Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// Production clock.
///
/// Reads through `tokio::time::Instant`, so a paused tokio runtime
/// (`start_paused = true`) also controls engines driven by this clock.
/// Outside a runtime it falls back to the plain system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Manually advanced clock for deterministic tests and simulations.
#[derive(Clone, Debug)]
pub struct ManualClock {
    instant: Arc<Mutex<Instant>>,
    base: Instant,
}

impl ManualClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            instant: Arc::new(Mutex::new(now)),
            base: now,
        }
    }

    /// Move time forward.
    pub fn advance(&self, duration: Duration) {
        *self.instant.lock() += duration;
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        *self.instant.lock() - self.base
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.instant.lock()
    }
}

/// Shared handle to a clock.
pub type SharedClock = Arc<dyn Clock>;
