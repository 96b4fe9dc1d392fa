//! Static screen layouts
//!
//! These stand in for the preference XML resources: each layout is the
//! ordered list of rows a screen starts with before any row is removed.

use serde::{Deserialize, Serialize};

use crate::platform::Intent;

use super::model::PreferenceKind;

/// Row keys
pub mod keys {
    pub const DEVICE_NAME: &str = "device_name";
    pub const SYSTEM_UPDATE_SETTINGS: &str = "system_update_settings";
    pub const ADDITIONAL_SYSTEM_UPDATE: &str = "additional_system_update_settings";
    pub const STATUS: &str = "status";
    pub const LEGAL: &str = "legal";
    pub const RESET: &str = "reset";
    pub const RESET_OPTIONS: &str = "reset_options";
    pub const MANUAL: &str = "manual";
    pub const REGULATORY_INFO: &str = "regulatory_info";
    pub const DEVICE_FEEDBACK: &str = "device_feedback";
    pub const TUTORIALS: &str = "tutorials";
    pub const SAFETY_LEGAL: &str = "safetylegal";
    pub const DEVICE_MODEL: &str = "device_model";
    pub const FIRMWARE_VERSION: &str = "firmware_version";
    pub const DISPLAY_VERSION: &str = "lineage_version";
    pub const BUILD_DATE: &str = "build_date";
    pub const SECURITY_PATCH: &str = "security_patch";
    pub const BASEBAND_VERSION: &str = "baseband_version";
    pub const KERNEL_VERSION: &str = "kernel_version";
    pub const BUILD_NUMBER: &str = "build_number";
    pub const SELINUX_STATUS: &str = "selinux_status";
    pub const EQUIPMENT_ID: &str = "fcc_equipment_id";
}

pub const ACTION_DEVICE_NAME: &str = "android.settings.DEVICE_NAME";
pub const ACTION_ADDITIONAL_SYSTEM_UPDATE: &str = "android.settings.ADDITIONAL_SYSTEM_UPDATE_SETTINGS";
pub const ACTION_SHOW_MANUAL: &str = "android.settings.SHOW_MANUAL";
pub const ACTION_SHOW_REGULATORY_INFO: &str = "android.settings.SHOW_REGULATORY_INFO";
pub const ACTION_TUTORIALS: &str = "android.settings.TUTORIALS";

pub const SETTINGS_PACKAGE: &str = "com.android.tv.settings";
pub const RESET_ACTIVITY: &str = "com.android.tv.settings.device.storage.ResetActivity";
pub const STATUS_FRAGMENT: &str = "com.android.tv.settings.about.StatusFragment";
pub const LEGAL_FRAGMENT: &str = "com.android.tv.settings.about.LegalFragment";
pub const RESET_OPTIONS_FRAGMENT: &str = "com.android.tv.settings.vendor.ResetOptionsFragment";

/// UI flavor of the settings app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    #[default]
    Classic,
    TwoPanel,
    X,
    Vendor,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Classic => "classic",
            Flavor::TwoPanel => "two_panel",
            Flavor::X => "x",
            Flavor::Vendor => "vendor",
        }
    }
}

/// Where a row's intent points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIntent {
    Action(&'static str),
    Component {
        package: &'static str,
        class: &'static str,
    },
}

impl RowIntent {
    pub fn to_intent(self) -> Intent {
        match self {
            RowIntent::Action(action) => Intent::new(action),
            RowIntent::Component { package, class } => Intent::explicit(package, class),
        }
    }
}

/// One row of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDef {
    pub key: &'static str,
    pub title: &'static str,
    pub summary: Option<&'static str>,
    pub kind: PreferenceKind,
    pub enabled: bool,
    pub fragment: Option<&'static str>,
    pub intent: Option<RowIntent>,
}

impl RowDef {
    pub const fn new(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            summary: None,
            kind: PreferenceKind::Plain,
            enabled: true,
            fragment: None,
            intent: None,
        }
    }

    /// Read-only information row
    pub const fn info(key: &'static str, title: &'static str) -> Self {
        let mut row = Self::new(key, title);
        row.enabled = false;
        row
    }

    pub const fn summary(mut self, summary: &'static str) -> Self {
        self.summary = Some(summary);
        self
    }

    pub const fn custom_description(mut self) -> Self {
        self.kind = PreferenceKind::CustomContentDescription;
        self
    }

    pub const fn fragment(mut self, fragment: &'static str) -> Self {
        self.fragment = Some(fragment);
        self
    }

    pub const fn action(mut self, action: &'static str) -> Self {
        self.intent = Some(RowIntent::Action(action));
        self
    }

    pub const fn component(mut self, package: &'static str, class: &'static str) -> Self {
        self.intent = Some(RowIntent::Component { package, class });
        self
    }
}

/// A named, ordered set of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub name: &'static str,
    pub rows: Vec<RowDef>,
}

/// The About layout for a flavor
pub fn device_info_layout(flavor: Flavor) -> ScreenLayout {
    let name = match flavor {
        Flavor::Classic | Flavor::TwoPanel => "device_info_settings",
        Flavor::X => "device_info_settings_x",
        Flavor::Vendor => "device_info_settings_vendor",
    };

    let mut rows = vec![
        RowDef::new(keys::DEVICE_NAME, "Device name").action(ACTION_DEVICE_NAME),
        RowDef::new(keys::SYSTEM_UPDATE_SETTINGS, "System update").custom_description(),
        RowDef::new(keys::ADDITIONAL_SYSTEM_UPDATE, "Additional system updates")
            .action(ACTION_ADDITIONAL_SYSTEM_UPDATE),
    ];

    if flavor != Flavor::X {
        rows.push(RowDef::new(keys::STATUS, "Status").fragment(STATUS_FRAGMENT));
        rows.push(RowDef::new(keys::LEGAL, "Legal information").fragment(LEGAL_FRAGMENT));
    }

    if flavor == Flavor::Vendor {
        rows.push(RowDef::new(keys::RESET_OPTIONS, "Reset options").fragment(RESET_OPTIONS_FRAGMENT));
    } else {
        rows.push(RowDef::new(keys::RESET, "Factory reset").custom_description());
    }

    rows.extend([
        RowDef::new(keys::MANUAL, "Manual").action(ACTION_SHOW_MANUAL),
        RowDef::new(keys::REGULATORY_INFO, "Regulatory labels").action(ACTION_SHOW_REGULATORY_INFO),
        RowDef::new(keys::DEVICE_FEEDBACK, "Send feedback"),
    ]);

    if flavor != Flavor::X {
        rows.push(RowDef::new(keys::TUTORIALS, "Tutorials").action(ACTION_TUTORIALS));
    }

    rows.extend([
        RowDef::new(keys::SAFETY_LEGAL, "Safety information"),
        RowDef::info(keys::DEVICE_MODEL, "Model"),
        RowDef::info(keys::FIRMWARE_VERSION, "Android TV OS version"),
        RowDef::info(keys::DISPLAY_VERSION, "Nenggala version"),
        RowDef::info(keys::BUILD_DATE, "Build date"),
        RowDef::info(keys::SECURITY_PATCH, "Android TV OS security patch level"),
        RowDef::info(keys::BASEBAND_VERSION, "Baseband version"),
        RowDef::info(keys::KERNEL_VERSION, "Kernel version"),
        RowDef::info(keys::BUILD_NUMBER, "Android TV OS build"),
        RowDef::info(keys::SELINUX_STATUS, "SELinux status").summary("Enforcing"),
        RowDef::info(keys::EQUIPMENT_ID, "Equipment ID"),
    ]);

    ScreenLayout { name, rows }
}

/// The vendor Reset Options layout
pub fn reset_options_layout() -> ScreenLayout {
    ScreenLayout {
        name: "reset_options_vendor",
        rows: vec![RowDef::new(keys::RESET, "Factory reset")
            .summary("Erase all data on this device")
            .component(SETTINGS_PACKAGE, RESET_ACTIVITY)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(layout: &ScreenLayout, key: &str) -> bool {
        layout.rows.iter().any(|r| r.key == key)
    }

    #[test]
    fn test_flavor_selects_layout_name() {
        assert_eq!(device_info_layout(Flavor::Classic).name, "device_info_settings");
        assert_eq!(device_info_layout(Flavor::TwoPanel).name, "device_info_settings");
        assert_eq!(device_info_layout(Flavor::X).name, "device_info_settings_x");
        assert_eq!(device_info_layout(Flavor::Vendor).name, "device_info_settings_vendor");
    }

    #[test]
    fn test_vendor_swaps_reset_for_reset_options() {
        let vendor = device_info_layout(Flavor::Vendor);
        assert!(has(&vendor, keys::RESET_OPTIONS));
        assert!(!has(&vendor, keys::RESET));

        let classic = device_info_layout(Flavor::Classic);
        assert!(has(&classic, keys::RESET));
        assert!(!has(&classic, keys::RESET_OPTIONS));
    }

    #[test]
    fn test_keys_are_unique() {
        for flavor in [Flavor::Classic, Flavor::TwoPanel, Flavor::X, Flavor::Vendor] {
            let layout = device_info_layout(flavor);
            let mut keys: Vec<_> = layout.rows.iter().map(|r| r.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), layout.rows.len(), "{:?}", flavor);
        }
    }

    #[test]
    fn test_info_rows_start_disabled() {
        let layout = device_info_layout(Flavor::Classic);
        let build = layout.rows.iter().find(|r| r.key == keys::BUILD_NUMBER).unwrap();
        assert!(!build.enabled);
    }

    #[test]
    fn test_flavor_serde_names() {
        assert_eq!(serde_json::to_value(Flavor::TwoPanel).unwrap(), "two_panel");
        let parsed: Flavor = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(parsed, Flavor::X);
    }
}
