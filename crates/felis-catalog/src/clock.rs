//! Time source injection for freshness checks.

use std::time::Instant;

/// Monotonic time source.
///
/// The catalog never reads the system clock directly for expiry decisions,
/// so tests can drive the cache through its lifecycle with a manual clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The production clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
