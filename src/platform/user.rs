//! # Users and restrictions
//!
//! Identifiers for the per-user restrictions an administrator can enforce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform user id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Restrictions consulted by the settings screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRestriction {
    /// Forbids enabling developer options
    NoDebuggingFeatures,
    /// Forbids the platform logo easter egg
    NoFun,
    /// Forbids factory reset
    NoFactoryReset,
}

impl UserRestriction {
    pub fn key(&self) -> &'static str {
        match self {
            UserRestriction::NoDebuggingFeatures => "no_debugging_features",
            UserRestriction::NoFun => "no_fun",
            UserRestriction::NoFactoryReset => "no_factory_reset",
        }
    }
}

impl fmt::Display for UserRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The device or profile admin enforcing a restriction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcedAdmin {
    /// Package of the admin component
    pub package: String,
    /// User the admin belongs to
    #[serde(default)]
    pub user_id: UserId,
}
