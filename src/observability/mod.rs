//! Observability for the settings screens
//!
//! Structured JSON logging of typed lifecycle and interaction events.
//! Logging is read-only: it never changes what a screen does.
//!
//! # Usage
//!
//! ```ignore
//! use tvsettings::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::EntrySelected, &[("entry", "SYSTEM_ABOUT_BUILD")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields
///
/// Failure events go to stderr at ERROR, everything else to stdout at INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::ScreenStarted);
        log_event(Event::ScreenStopped);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("flavor", "classic")]);
        log_event_with_fields(Event::ActivityLaunchFailed, &[("intent", "android.intent.action.MAIN")]);
    }
}
