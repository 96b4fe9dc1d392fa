//! CLI-specific error types
//!
//! Errors returned from a command are fatal; `main` prints them and exits 1.
//! Inside a session, a bad request is answered with an error response and
//! the session goes on.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::preference::ScreenError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Device profile unreadable or invalid
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Screen could not be built from its layout
    ScreenError,
    /// Session request not understood
    BadRequest,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TVS_CLI_CONFIG_ERROR",
            Self::IoError => "TVS_CLI_IO_ERROR",
            Self::ScreenError => "TVS_CLI_SCREEN_ERROR",
            Self::BadRequest => "TVS_CLI_BAD_REQUEST",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BadRequest, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<ScreenError> for CliError {
    fn from(e: ScreenError) -> Self {
        Self::new(CliErrorCode::ScreenError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
