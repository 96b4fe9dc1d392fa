//! Recent tap timestamps for burst detection.

/// Number of taps that make up a burst
pub const BURST_TAPS: usize = 3;

/// Maximum span, oldest to newest, of a burst
pub const BURST_WINDOW_MS: u64 = 500;

/// The last [`BURST_TAPS`] tap times, oldest first
///
/// Slots that have never been filled are `None`, so no burst is reported
/// until three taps have been recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TapHistory {
    slots: [Option<u64>; BURST_TAPS],
}

impl TapHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift out the oldest tap and append `now`
    pub fn record(&mut self, now: u64) {
        self.slots.rotate_left(1);
        self.slots[BURST_TAPS - 1] = Some(now);
    }

    /// True if the oldest recorded tap is within the window before `now`
    pub fn is_burst(&self, now: u64) -> bool {
        match self.slots[0] {
            Some(oldest) => oldest >= now.saturating_sub(BURST_WINDOW_MS),
            None => false,
        }
    }

    /// Record a tap at `now` and report whether it completes a burst
    pub fn record_tap(&mut self, now: u64) -> bool {
        self.record(now);
        self.is_burst(now)
    }

    /// Recorded taps, oldest first
    pub fn taps(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_taps_within_window_is_burst() {
        let mut history = TapHistory::new();
        assert!(!history.record_tap(0));
        assert!(!history.record_tap(100));
        assert!(history.record_tap(200));
    }

    #[test]
    fn test_two_taps_are_never_a_burst() {
        let mut history = TapHistory::new();
        assert!(!history.record_tap(10_000));
        assert!(!history.record_tap(10_001));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let mut history = TapHistory::new();
        history.record_tap(1_000);
        history.record_tap(1_200);
        assert!(history.record_tap(1_500));

        let mut history = TapHistory::new();
        history.record_tap(1_000);
        history.record_tap(1_200);
        assert!(!history.record_tap(1_501));
    }

    #[test]
    fn test_oldest_is_evicted() {
        let mut history = TapHistory::new();
        for t in [0, 1_000, 1_100, 1_200] {
            history.record(t);
        }
        assert_eq!(history.taps().collect::<Vec<_>>(), vec![1_000, 1_100, 1_200]);
        assert!(history.is_burst(1_200));
    }

    #[test]
    fn test_slow_taps_then_fast_taps() {
        let mut history = TapHistory::new();
        assert!(!history.record_tap(0));
        assert!(!history.record_tap(600));
        assert!(!history.record_tap(1_200));
        assert!(!history.record_tap(1_300));
        assert!(history.record_tap(1_400));
    }
}
