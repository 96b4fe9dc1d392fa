//! Observable events
//!
//! Every line the crate logs is named by one of these. Events are
//! explicit and typed.

use std::fmt;

/// Observable events in the settings screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Device profile loaded
    ConfigLoaded,

    // Screen lifecycle
    /// Screen rows inflated and populated
    ScreenCreated,
    /// Screen became visible
    ScreenStarted,
    /// Screen became interactive
    ScreenResumed,
    /// Screen stopped being visible
    ScreenStopped,

    // Instrumentation
    /// A row with an instrumentation id was tapped
    EntrySelected,

    // Developer mode
    /// Countdown advanced by a burst
    DevModeCountdown,
    /// Developer mode was just enabled
    DevModeEnabled,
    /// Burst while developer mode was already on
    DevModeAlreadyEnabled,
    /// Burst denied by a user restriction
    DevModeRestricted,
    /// Tap ignored for a secondary user
    DevModeSecondaryUser,

    // Platform logo
    /// Platform logo activity started
    EasterEggLaunched,
    /// Platform logo denied by a user restriction
    EasterEggDenied,

    // Platform dispatch
    /// An activity could not be started
    ActivityLaunchFailed,
    /// Carrier client-initiated action broadcast on system update
    CarrierActionBroadcast,
    /// Device name summary refreshed
    DeviceNameRefreshed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::ScreenCreated => "SCREEN_CREATED",
            Event::ScreenStarted => "SCREEN_STARTED",
            Event::ScreenResumed => "SCREEN_RESUMED",
            Event::ScreenStopped => "SCREEN_STOPPED",

            Event::EntrySelected => "ENTRY_SELECTED",

            Event::DevModeCountdown => "DEV_MODE_COUNTDOWN",
            Event::DevModeEnabled => "DEV_MODE_ENABLED",
            Event::DevModeAlreadyEnabled => "DEV_MODE_ALREADY_ENABLED",
            Event::DevModeRestricted => "DEV_MODE_RESTRICTED",
            Event::DevModeSecondaryUser => "DEV_MODE_SECONDARY_USER",

            Event::EasterEggLaunched => "PLATLOGO_LAUNCHED",
            Event::EasterEggDenied => "PLATLOGO_DENIED",

            Event::ActivityLaunchFailed => "ACTIVITY_LAUNCH_FAILED",
            Event::CarrierActionBroadcast => "CARRIER_ACTION_BROADCAST",
            Event::DeviceNameRefreshed => "DEVICE_NAME_REFRESHED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ActivityLaunchFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
