//! # Clocks
//!
//! Monotonic millisecond time for tap bursts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Monotonic clock with millisecond resolution
pub trait Clock: Send + Sync {
    /// Milliseconds since an arbitrary fixed origin, never decreasing
    fn uptime_millis(&self) -> u64;
}

/// Real clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn uptime_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock set by hand
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the screen.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    /// Jump to an absolute time. Earlier times are ignored.
    pub fn set(&self, millis: u64) {
        self.now.fetch_max(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn uptime_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_shared_between_clones() {
        let clock = ManualClock::new(100);
        let handle = clock.clone();

        handle.advance(50);
        assert_eq!(clock.uptime_millis(), 150);

        handle.set(1_000);
        assert_eq!(clock.uptime_millis(), 1_000);
    }

    #[test]
    fn test_manual_clock_never_goes_back() {
        let clock = ManualClock::new(500);
        clock.set(200);
        assert_eq!(clock.uptime_millis(), 500);
    }

    #[test]
    fn test_monotonic_clock_does_not_decrease() {
        let clock = MonotonicClock::new();
        let a = clock.uptime_millis();
        let b = clock.uptime_millis();
        assert!(b >= a);
    }
}
