//! Static device facts surfaced on the About screen.

use serde::{Deserialize, Serialize};

/// SELinux state reported by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelinuxState {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub enforced: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SelinuxState {
    fn default() -> Self {
        Self {
            enabled: true,
            enforced: true,
        }
    }
}

/// Carrier-provided client-initiated action on system update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierConfig {
    /// Broadcast an intent before opening system update settings
    #[serde(default)]
    pub ci_action_on_sys_update: bool,
    /// Action of the intent to broadcast
    #[serde(default)]
    pub ci_action_intent: Option<String>,
    /// Optional extra key
    #[serde(default)]
    pub ci_action_extra: Option<String>,
    /// Value for the extra key
    #[serde(default)]
    pub ci_action_extra_val: Option<String>,
}

/// Boolean resources that toggle optional rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFlag {
    /// Show the additional system update row
    AdditionalSystemUpdateSetting,
    /// Show the manual row
    ShowManual,
}
