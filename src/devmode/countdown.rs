//! Bursts remaining until developer mode unlocks.

use serde::Serialize;

/// Bursts needed to become a developer
pub const TAPS_TO_BE_A_DEVELOPER: u32 = 7;

/// Countdown between screen resumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCountdown {
    /// Developer mode was already on when the screen resumed
    DisabledPermanently,
    /// Bursts still required, always > 0
    Counting(u32),
    /// Unlocked during this visit
    Zero,
}

impl UnlockCountdown {
    /// Initial countdown for the persisted developer mode flag
    pub fn for_developer_mode(enabled: bool) -> Self {
        if enabled {
            UnlockCountdown::DisabledPermanently
        } else {
            UnlockCountdown::Counting(TAPS_TO_BE_A_DEVELOPER)
        }
    }

    pub fn state(&self) -> UnlockState {
        match *self {
            UnlockCountdown::DisabledPermanently => UnlockState::AlreadyUnlocked,
            UnlockCountdown::Counting(n) => UnlockState::Locked(n),
            UnlockCountdown::Zero => UnlockState::JustUnlocked,
        }
    }
}

/// Whether reaching `remaining` announces the countdown to the user
///
/// The first couple of bursts stay silent: only counts strictly between
/// zero and `TAPS_TO_BE_A_DEVELOPER - 2` are shown.
pub fn announces_countdown(remaining: u32) -> bool {
    remaining > 0 && remaining < TAPS_TO_BE_A_DEVELOPER - 2
}

/// Externally visible unlock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "remaining", rename_all = "snake_case")]
pub enum UnlockState {
    Locked(u32),
    JustUnlocked,
    AlreadyUnlocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_countdown() {
        assert_eq!(
            UnlockCountdown::for_developer_mode(false),
            UnlockCountdown::Counting(7)
        );
        assert_eq!(
            UnlockCountdown::for_developer_mode(true).state(),
            UnlockState::AlreadyUnlocked
        );
    }

    #[test]
    fn test_announcement_window() {
        let announced: Vec<u32> = (0..=TAPS_TO_BE_A_DEVELOPER)
            .filter(|n| announces_countdown(*n))
            .collect();
        assert_eq!(announced, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(UnlockState::Locked(3)).unwrap();
        assert_eq!(json["state"], "locked");
        assert_eq!(json["remaining"], 3);

        let json = serde_json::to_value(UnlockState::JustUnlocked).unwrap();
        assert_eq!(json["state"], "just_unlocked");
    }
}
