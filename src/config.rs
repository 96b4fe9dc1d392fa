//! # Device profile configuration
//!
//! A JSON document describing the device the screens run against: flavor,
//! user and restrictions, system properties, build facts, which activities
//! resolve, and the carrier config. [`MemoryPlatform`] serves it to the
//! screens.
//!
//! Every field is optional; an empty object `{}` is a valid profile for an
//! unrestricted admin user on the classic flavor.
//!
//! [`MemoryPlatform`]: crate::platform::MemoryPlatform

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};
use crate::platform::{CarrierConfig, EnforcedAdmin, SelinuxState, UserId, UserRestriction};
use crate::preference::Flavor;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Profile file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile is not valid JSON for this schema
    #[error("Invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Profile parsed but violates a constraint
    #[error("Invalid profile: {0}")]
    Invalid(String),
}

/// Build facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Build display id shown under "Build"
    #[serde(default = "default_build_display")]
    pub display: String,

    /// Android version shown under "Version"
    #[serde(default = "default_release")]
    pub release: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Board MSV, hex encoded
    #[serde(default)]
    pub msv: Option<String>,
}

fn default_build_display() -> String {
    "UNKNOWN".to_string()
}
fn default_release() -> String {
    "14".to_string()
}
fn default_model() -> String {
    "Android TV".to_string()
}
fn default_device_name() -> String {
    "Android TV".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            display: default_build_display(),
            release: default_release(),
            model: default_model(),
            msv: None,
        }
    }
}

/// Values of the boolean resources that toggle optional rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFlags {
    #[serde(default)]
    pub show_manual: bool,
    #[serde(default)]
    pub additional_system_update_setting: bool,
}

/// An emulated device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    #[serde(default)]
    pub flavor: Flavor,

    #[serde(default)]
    pub user_id: UserId,

    /// Primary user; secondary users cannot unlock developer mode
    #[serde(default = "default_true")]
    pub admin_user: bool,

    /// Restrictions in force for the current user
    #[serde(default)]
    pub restrictions: Vec<UserRestriction>,

    /// Admin enforcing the restrictions, if any is known
    #[serde(default)]
    pub enforcing_admin: Option<EnforcedAdmin>,

    /// Initial value of the persisted developer mode flag
    #[serde(default)]
    pub developer_mode_enabled: bool,

    #[serde(default)]
    pub system_properties: BTreeMap<String, String>,

    #[serde(default)]
    pub build: BuildInfo,

    #[serde(default)]
    pub baseband_versions: Vec<Option<String>>,

    /// Contents of `/proc/version`
    #[serde(default)]
    pub proc_version: Option<String>,

    #[serde(default)]
    pub selinux: SelinuxState,

    #[serde(default)]
    pub wifi_only: bool,

    #[serde(default)]
    pub feedback_reporter_package: Option<String>,

    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// Intent action or component class, mapped to the resolved label
    #[serde(default)]
    pub resolvable_activities: BTreeMap<String, String>,

    /// Actions or component classes that fail to start
    #[serde(default)]
    pub missing_activities: Vec<String>,

    #[serde(default)]
    pub carrier_config: Option<CarrierConfig>,

    #[serde(default)]
    pub resources: ResourceFlags,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            user_id: UserId::default(),
            admin_user: true,
            restrictions: Vec::new(),
            enforcing_admin: None,
            developer_mode_enabled: false,
            system_properties: BTreeMap::new(),
            build: BuildInfo::default(),
            baseband_versions: Vec::new(),
            proc_version: None,
            selinux: SelinuxState::default(),
            wifi_only: false,
            feedback_reporter_package: None,
            device_name: default_device_name(),
            resolvable_activities: BTreeMap::new(),
            missing_activities: Vec::new(),
            carrier_config: None,
            resources: ResourceFlags::default(),
        }
    }
}

impl DeviceProfile {
    /// Load a profile from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let profile = Self::from_json(&content)?;

        let path_field = path.display().to_string();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("flavor", profile.flavor.as_str()), ("path", path_field.as_str())],
        );

        Ok(profile)
    }

    /// Parse and validate a profile
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let profile: DeviceProfile = serde_json::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.build.display.trim().is_empty() {
            return Err(ConfigError::Invalid("build.display must not be empty".into()));
        }

        if self.device_name.trim().is_empty() {
            return Err(ConfigError::Invalid("device_name must not be empty".into()));
        }

        if let Some(key) = self
            .system_properties
            .keys()
            .find(|k| k.is_empty() || k.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::Invalid(format!(
                "Invalid system property name: '{}'",
                key
            )));
        }

        if self.enforcing_admin.is_some() && self.restrictions.is_empty() {
            return Err(ConfigError::Invalid(
                "enforcing_admin is set but no restrictions are".into(),
            ));
        }

        if let Some(ref carrier) = self.carrier_config {
            if carrier.ci_action_extra_val.is_some() && carrier.ci_action_extra.is_none() {
                return Err(ConfigError::Invalid(
                    "carrier_config.ci_action_extra_val requires ci_action_extra".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default_profile() {
        let profile = DeviceProfile::from_json("{}").unwrap();
        assert_eq!(profile, DeviceProfile::default());
        assert!(profile.admin_user);
        assert!(!profile.developer_mode_enabled);
        assert_eq!(profile.flavor, Flavor::Classic);
    }

    #[test]
    fn test_parses_restrictions_and_flavor() {
        let profile = DeviceProfile::from_json(
            r#"{
                "flavor": "vendor",
                "restrictions": ["no_debugging_features", "no_factory_reset"],
                "enforcing_admin": {"package": "com.example.dpc"}
            }"#,
        )
        .unwrap();

        assert_eq!(profile.flavor, Flavor::Vendor);
        assert_eq!(
            profile.restrictions,
            vec![UserRestriction::NoDebuggingFeatures, UserRestriction::NoFactoryReset]
        );
        assert_eq!(profile.enforcing_admin.unwrap().package, "com.example.dpc");
    }

    #[test]
    fn test_rejects_empty_device_name() {
        let err = DeviceProfile::from_json(r#"{"device_name": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_property_name() {
        let err = DeviceProfile::from_json(r#"{"system_properties": {"ro.build date": "x"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("ro.build date"));
    }

    #[test]
    fn test_rejects_admin_without_restrictions() {
        let err = DeviceProfile::from_json(r#"{"enforcing_admin": {"package": "p"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_flavor() {
        let err = DeviceProfile::from_json(r#"{"flavor": "neon"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
