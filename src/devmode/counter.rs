//! The developer mode unlock counter.

use serde::Serialize;

use crate::observability::{log_event_with_fields, Event};
use crate::platform::{DeveloperSettings, MessageHandle, MessageSink, UserManager, UserRestriction};

use super::countdown::{announces_countdown, UnlockCountdown, UnlockState};
use super::feedback::Feedback;
use super::history::TapHistory;

/// What a qualifying tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TapOutcome {
    /// Not the third tap of a burst
    NotBurst,
    /// Denied by `no_debugging_features`
    Restricted,
    /// Developer mode was already on
    AlreadyEnabled,
    /// Countdown decremented
    CountedDown { remaining: u32, announced: bool },
    /// This burst turned developer mode on
    Enabled,
    /// Developer mode was turned on earlier in this visit
    UnlockedThisVisit,
}

/// Counts bursts of taps on the build number row and unlocks developer
/// mode after [`TAPS_TO_BE_A_DEVELOPER`](super::TAPS_TO_BE_A_DEVELOPER).
///
/// The tap history lives as long as the counter; the countdown is reset
/// by [`on_resume`](Self::on_resume). A burst that straddles leaving and
/// re-entering the screen is still detected.
#[derive(Debug, Clone)]
pub struct DeveloperModeUnlockCounter {
    history: TapHistory,
    countdown: UnlockCountdown,
    last_message: Option<MessageHandle>,
}

impl DeveloperModeUnlockCounter {
    /// Counter for a screen that has not resumed yet
    pub fn new(developer_mode_enabled: bool) -> Self {
        Self {
            history: TapHistory::new(),
            countdown: UnlockCountdown::for_developer_mode(developer_mode_enabled),
            last_message: None,
        }
    }

    /// Re-arm the countdown from the persisted flag and forget the last
    /// message. The tap history is kept.
    pub fn on_resume<S>(&mut self, settings: &S)
    where
        S: DeveloperSettings + ?Sized,
    {
        self.countdown =
            UnlockCountdown::for_developer_mode(settings.is_development_settings_enabled());
        self.last_message = None;
    }

    pub fn state(&self) -> UnlockState {
        self.countdown.state()
    }

    pub fn history(&self) -> &TapHistory {
        &self.history
    }

    /// Handle one tap at monotonic time `now` (milliseconds)
    pub fn on_qualifying_tap<H>(&mut self, now: u64, host: &H) -> TapOutcome
    where
        H: UserManager + DeveloperSettings + MessageSink + ?Sized,
    {
        if !self.history.record_tap(now) {
            return TapOutcome::NotBurst;
        }

        let restriction = UserRestriction::NoDebuggingFeatures;
        if host.has_user_restriction(restriction) {
            if let Some(admin) = host.enforcing_admin(host.current_user(), restriction) {
                host.show_admin_support_details(&admin);
            }
            log_event_with_fields(Event::DevModeRestricted, &[("restriction", restriction.key())]);
            return TapOutcome::Restricted;
        }

        // Enabled elsewhere since the last resume
        if matches!(self.countdown, UnlockCountdown::Counting(_))
            && host.is_development_settings_enabled()
        {
            self.countdown = UnlockCountdown::DisabledPermanently;
        }

        match self.countdown {
            UnlockCountdown::DisabledPermanently => {
                self.replace_message(host, Feedback::AlreadyEnabled);
                log_event_with_fields(Event::DevModeAlreadyEnabled, &[]);
                TapOutcome::AlreadyEnabled
            }
            UnlockCountdown::Counting(n) => {
                let remaining = n - 1;
                if remaining == 0 {
                    self.countdown = UnlockCountdown::Zero;
                    host.set_development_settings_enabled(true);
                    self.replace_message(host, Feedback::Enabled);
                    log_event_with_fields(Event::DevModeEnabled, &[]);
                    return TapOutcome::Enabled;
                }

                self.countdown = UnlockCountdown::Counting(remaining);
                let announced = announces_countdown(remaining);
                if announced {
                    self.replace_message(host, Feedback::Countdown(remaining));
                }
                let remaining_field = remaining.to_string();
                log_event_with_fields(
                    Event::DevModeCountdown,
                    &[
                        ("announced", if announced { "true" } else { "false" }),
                        ("remaining", remaining_field.as_str()),
                    ],
                );
                TapOutcome::CountedDown {
                    remaining,
                    announced,
                }
            }
            UnlockCountdown::Zero => TapOutcome::UnlockedThisVisit,
        }
    }

    /// Cancel the message in flight, if any, and show `feedback`
    fn replace_message<M>(&mut self, messages: &M, feedback: Feedback)
    where
        M: MessageSink + ?Sized,
    {
        if let Some(previous) = self.last_message.take() {
            messages.cancel(previous);
        }
        let handle = messages.show(&feedback.to_string(), feedback.duration());
        self.last_message = Some(handle);
    }
}
