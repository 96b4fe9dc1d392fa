//! # Developer mode unlock
//!
//! Tapping the build number row in three-tap bursts (three taps within
//! 500 ms) seven times turns on developer mode. The last few bursts
//! announce how many remain; a user restricted from debugging features
//! gets the administrator notice instead.
//!
//! ```text
//! Locked(7) --burst--> Locked(6) ... Locked(1) --burst--> JustUnlocked
//! AlreadyUnlocked --burst--> AlreadyUnlocked ("already a developer")
//! ```

mod countdown;
mod counter;
mod feedback;
mod history;

pub use countdown::{announces_countdown, UnlockCountdown, UnlockState, TAPS_TO_BE_A_DEVELOPER};
pub use counter::{DeveloperModeUnlockCounter, TapOutcome};
pub use feedback::Feedback;
pub use history::{TapHistory, BURST_TAPS, BURST_WINDOW_MS};
