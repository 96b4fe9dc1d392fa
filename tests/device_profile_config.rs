//! Device Profile Configuration Tests
//!
//! Loading profiles from disk and rejecting invalid ones.

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use tvsettings::config::{ConfigError, DeviceProfile};
use tvsettings::platform::UserRestriction;
use tvsettings::preference::Flavor;

fn write_profile(dir: &TempDir, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("device.json");
    fs::write(&path, value.to_string()).unwrap();
    path
}

#[test]
fn test_load_full_profile() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(
        &tmp,
        json!({
            "flavor": "two_panel",
            "user_id": 10,
            "admin_user": false,
            "restrictions": ["no_fun"],
            "developer_mode_enabled": true,
            "system_properties": {"ro.build.date": "Tue Mar 5 2024"},
            "build": {"display": "ABC.123", "msv": "0000"},
            "baseband_versions": ["M1", null],
            "selinux": {"enforced": false},
            "device_name": "Den TV",
            "carrier_config": {
                "ci_action_on_sys_update": true,
                "ci_action_intent": "com.carrier.UPDATE"
            },
            "resources": {"show_manual": true}
        }),
    );

    let profile = DeviceProfile::load(&path).unwrap();
    assert_eq!(profile.flavor, Flavor::TwoPanel);
    assert_eq!(profile.user_id.0, 10);
    assert!(!profile.admin_user);
    assert_eq!(profile.restrictions, vec![UserRestriction::NoFun]);
    assert!(profile.developer_mode_enabled);
    assert_eq!(profile.build.display, "ABC.123");
    assert_eq!(profile.build.release, "14");
    assert_eq!(profile.baseband_versions, vec![Some("M1".to_string()), None]);
    assert!(profile.selinux.enabled);
    assert!(!profile.selinux.enforced);
    assert!(profile.resources.show_manual);
    assert!(!profile.resources.additional_system_update_setting);
}

#[test]
fn test_missing_file_is_read_error() {
    let tmp = TempDir::new().unwrap();
    let err = DeviceProfile::load(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("device.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        DeviceProfile::load(&path).unwrap_err(),
        ConfigError::Parse(_)
    ));
}

#[test]
fn test_carrier_extra_value_needs_key() {
    let tmp = TempDir::new().unwrap();
    let path = write_profile(
        &tmp,
        json!({"carrier_config": {"ci_action_extra_val": "x"}}),
    );
    assert!(matches!(
        DeviceProfile::load(&path).unwrap_err(),
        ConfigError::Invalid(_)
    ));
}
