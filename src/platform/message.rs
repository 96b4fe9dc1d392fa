//! Transient user-facing messages.

use serde::{Deserialize, Serialize};

/// How long a transient message stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDuration {
    Short,
    Long,
}

/// Handle to a shown message, used to cancel it before it times out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHandle(pub u64);
