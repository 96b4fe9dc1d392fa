//! # Platform Errors
//!
//! Failures reported by host collaborators.

use thiserror::Error;

/// Result type for platform calls
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Platform dispatch errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// No activity matches the intent
    #[error("No activity found to handle {0}")]
    ActivityNotFound(String),

    /// The host refused to deliver a broadcast
    #[error("Broadcast rejected: {0}")]
    BroadcastRejected(String),
}
