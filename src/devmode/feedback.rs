//! Messages shown while unlocking developer mode.

use std::fmt;

use crate::platform::MessageDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Bursts still needed
    Countdown(u32),
    /// Developer mode just turned on
    Enabled,
    /// Developer mode was on before this visit
    AlreadyEnabled,
}

impl Feedback {
    pub fn duration(&self) -> MessageDuration {
        match self {
            Feedback::Countdown(_) => MessageDuration::Short,
            Feedback::Enabled | Feedback::AlreadyEnabled => MessageDuration::Long,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Countdown(1) => {
                write!(f, "You are now 1 step away from being a developer.")
            }
            Feedback::Countdown(n) => {
                write!(f, "You are now {} steps away from being a developer.", n)
            }
            Feedback::Enabled => write!(f, "You are now a developer!"),
            Feedback::AlreadyEnabled => write!(f, "No need, you are already a developer."),
        }
    }
}
