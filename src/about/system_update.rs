//! Carrier client-initiated action on system update.

use crate::platform::{CarrierConfig, Intent};

/// The intent the carrier wants broadcast before system update settings
/// open, if the carrier asks for one
pub fn carrier_update_broadcast(config: &CarrierConfig) -> Option<Intent> {
    if !config.ci_action_on_sys_update {
        return None;
    }

    let action = config.ci_action_intent.as_deref().filter(|a| !a.is_empty())?;
    let mut intent = Intent::new(action);

    if let Some(extra) = config.ci_action_extra.as_deref().filter(|e| !e.is_empty()) {
        intent.put_extra_str(extra, config.ci_action_extra_val.clone());
    }

    Some(intent)
}
