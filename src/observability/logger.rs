//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then fields by key)
//! - Explicit severity levels
//! - Synchronous, no buffering

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn to_stderr(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set while stdout carries a response stream
static STDOUT_RESERVED: AtomicBool = AtomicBool::new(false);

/// A structured logger that outputs JSON lines
///
/// INFO and below go to stdout, ERROR and FATAL to stderr. Once stdout is
/// reserved with [`Logger::reserve_stdout`], every line goes to stderr.
pub struct Logger;

impl Logger {
    /// Keep log lines off stdout for the rest of the process
    pub fn reserve_stdout() {
        STDOUT_RESERVED.store(true, Ordering::SeqCst);
    }

    /// Whether a line at `severity` is written to stderr
    pub fn writes_to_stderr(severity: Severity) -> bool {
        severity.to_stderr() || STDOUT_RESERVED.load(Ordering::SeqCst)
    }

    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if Self::writes_to_stderr(severity) {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::render(severity, event, fields);
        // Logging never fails the caller
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Render one log line, newline-terminated
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        // serde_json's default map is ordered by key, so event and severity
        // are written by hand ahead of the sorted fields.
        let sorted: BTreeMap<&str, &str> = fields
            .iter()
            .filter(|(k, _)| *k != "event" && *k != "severity")
            .copied()
            .collect();

        let mut line = String::with_capacity(128);
        line.push('{');
        line.push_str("\"event\":");
        line.push_str(&Value::String(event.to_string()).to_string());
        line.push_str(",\"severity\":");
        line.push_str(&Value::String(severity.as_str().to_string()).to_string());
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&Value::String(key.to_string()).to_string());
            line.push(':');
            line.push_str(&Value::String(value.to_string()).to_string());
        }
        line.push_str("}\n");
        line
    }

    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

/// Capture a log line into a string for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_error_goes_to_stderr() {
        assert!(!Severity::Info.to_stderr());
        assert!(!Severity::Warn.to_stderr());
        assert!(Severity::Error.to_stderr());
        assert!(Severity::Fatal.to_stderr());
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(Severity::Info, "SCREEN_CREATED", &[("screen", "about")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "SCREEN_CREATED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["screen"], "about");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let a = capture_log(Severity::Info, "T", &[("zebra", "1"), ("apple", "2"), ("mango", "3")]);
        let b = capture_log(Severity::Info, "T", &[("mango", "3"), ("zebra", "1"), ("apple", "2")]);
        assert_eq!(a, b);

        let event_pos = a.find("\"event\"").unwrap();
        let severity_pos = a.find("\"severity\"").unwrap();
        let apple_pos = a.find("apple").unwrap();
        let zebra_pos = a.find("zebra").unwrap();
        assert!(event_pos < severity_pos);
        assert!(severity_pos < apple_pos);
        assert!(apple_pos < zebra_pos);
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture_log(
            Severity::Info,
            "KERNEL",
            &[("summary", "4.19.0\nuser@host #1\n\"quoted\"")],
        );

        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"], "4.19.0\nuser@host #1\n\"quoted\"");
    }

    #[test]
    fn test_reserved_field_names_are_dropped() {
        let output = capture_log(Severity::Warn, "REAL", &[("event", "FAKE")]);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "REAL");
    }

    #[test]
    fn test_reserved_stdout_sends_every_severity_to_stderr() {
        assert!(Logger::writes_to_stderr(Severity::Error));

        Logger::reserve_stdout();
        assert!(Logger::writes_to_stderr(Severity::Trace));
        assert!(Logger::writes_to_stderr(Severity::Info));
        assert!(Logger::writes_to_stderr(Severity::Warn));
    }
}
