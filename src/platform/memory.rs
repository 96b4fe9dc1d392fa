//! In-memory platform
//!
//! Serves a [`DeviceProfile`] and records every side effect the screens
//! cause, so the CLI can report them and tests can assert on them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::config::DeviceProfile;

use super::device::{CarrierConfig, ResourceFlag, SelinuxState};
use super::errors::{PlatformError, PlatformResult};
use super::intent::{Intent, ResolveInfo};
use super::message::{MessageDuration, MessageHandle};
use super::user::{EnforcedAdmin, UserId, UserRestriction};
use super::{
    ActivityManager, DeveloperSettings, DeviceInfo, MessageSink, PackageManager, SystemProperties,
    UserManager,
};

/// A message passed to [`MessageSink::show`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShownMessage {
    pub handle: MessageHandle,
    pub text: String,
    pub duration: MessageDuration,
    pub cancelled: bool,
}

/// Side effects observed by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformRecords {
    pub started: Vec<Intent>,
    pub started_for_result: Vec<(Intent, i32)>,
    pub broadcasts: Vec<Intent>,
    pub messages: Vec<ShownMessage>,
    pub admin_notices: Vec<EnforcedAdmin>,
    /// Every write to the developer mode flag, in order
    pub developer_mode_writes: Vec<bool>,
}

#[derive(Debug)]
struct MutableState {
    developer_mode: bool,
    device_name: String,
    records: PlatformRecords,
}

/// Platform backed by a device profile
#[derive(Debug, Clone)]
pub struct MemoryPlatform {
    profile: Arc<DeviceProfile>,
    state: Arc<Mutex<MutableState>>,
    next_handle: Arc<AtomicU64>,
}

impl MemoryPlatform {
    pub fn new(profile: DeviceProfile) -> Self {
        let state = MutableState {
            developer_mode: profile.developer_mode_enabled,
            device_name: profile.device_name.clone(),
            records: PlatformRecords::default(),
        };
        Self {
            profile: Arc::new(profile),
            state: Arc::new(Mutex::new(state)),
            next_handle: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    fn state(&self) -> MutexGuard<'_, MutableState> {
        // A panic while holding the lock leaves plain data behind; keep serving it
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of recorded side effects
    pub fn records(&self) -> PlatformRecords {
        self.state().records.clone()
    }

    /// Take and clear recorded side effects
    pub fn take_records(&self) -> PlatformRecords {
        std::mem::take(&mut self.state().records)
    }

    /// Rename the device, as the device name settings screen would
    pub fn set_device_name(&self, name: impl Into<String>) {
        self.state().device_name = name.into();
    }

    /// Messages that were shown and not cancelled
    pub fn visible_messages(&self) -> Vec<String> {
        self.state()
            .records
            .messages
            .iter()
            .filter(|m| !m.cancelled)
            .map(|m| m.text.clone())
            .collect()
    }

    fn lookup_label(&self, intent: &Intent) -> Option<&String> {
        let activities = &self.profile.resolvable_activities;
        intent
            .action
            .as_ref()
            .and_then(|a| activities.get(a))
            .or_else(|| intent.component.as_ref().and_then(|c| activities.get(&c.class)))
    }

    fn check_launchable(&self, intent: &Intent) -> PlatformResult<()> {
        if self
            .profile
            .missing_activities
            .iter()
            .any(|name| intent.targets(name))
        {
            return Err(PlatformError::ActivityNotFound(intent.to_string()));
        }
        Ok(())
    }
}

impl UserManager for MemoryPlatform {
    fn current_user(&self) -> UserId {
        self.profile.user_id
    }

    fn is_admin_user(&self) -> bool {
        self.profile.admin_user
    }

    fn has_user_restriction(&self, restriction: UserRestriction) -> bool {
        self.profile.restrictions.contains(&restriction)
    }

    fn enforcing_admin(&self, user: UserId, restriction: UserRestriction) -> Option<EnforcedAdmin> {
        if user != self.profile.user_id || !self.has_user_restriction(restriction) {
            return None;
        }
        self.profile.enforcing_admin.clone()
    }

    fn show_admin_support_details(&self, admin: &EnforcedAdmin) {
        self.state().records.admin_notices.push(admin.clone());
    }
}

impl DeveloperSettings for MemoryPlatform {
    fn is_development_settings_enabled(&self) -> bool {
        self.state().developer_mode
    }

    fn set_development_settings_enabled(&self, enabled: bool) {
        let mut state = self.state();
        state.developer_mode = enabled;
        state.records.developer_mode_writes.push(enabled);
    }
}

impl MessageSink for MemoryPlatform {
    fn show(&self, text: &str, duration: MessageDuration) -> MessageHandle {
        let handle = MessageHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.state().records.messages.push(ShownMessage {
            handle,
            text: text.to_string(),
            duration,
            cancelled: false,
        });
        handle
    }

    fn cancel(&self, handle: MessageHandle) {
        if let Some(message) = self
            .state()
            .records
            .messages
            .iter_mut()
            .find(|m| m.handle == handle)
        {
            message.cancelled = true;
        }
    }
}

impl SystemProperties for MemoryPlatform {
    fn get(&self, key: &str) -> Option<String> {
        self.profile.system_properties.get(key).cloned()
    }
}

impl PackageManager for MemoryPlatform {
    fn resolve_system_activity(&self, intent: &Intent) -> Option<ResolveInfo> {
        self.lookup_label(intent).map(|label| ResolveInfo {
            label: label.clone(),
        })
    }
}

impl ActivityManager for MemoryPlatform {
    fn start_activity(&self, intent: Intent) -> PlatformResult<()> {
        self.check_launchable(&intent)?;
        self.state().records.started.push(intent);
        Ok(())
    }

    fn start_activity_for_result(&self, intent: Intent, request_code: i32) -> PlatformResult<()> {
        self.check_launchable(&intent)?;
        self.state()
            .records
            .started_for_result
            .push((intent, request_code));
        Ok(())
    }

    fn send_broadcast(&self, intent: Intent) -> PlatformResult<()> {
        if intent.action.as_deref().map_or(true, str::is_empty) {
            return Err(PlatformError::BroadcastRejected(intent.to_string()));
        }
        self.state().records.broadcasts.push(intent);
        Ok(())
    }
}

impl DeviceInfo for MemoryPlatform {
    fn build_display(&self) -> String {
        self.profile.build.display.clone()
    }

    fn release_or_codename(&self) -> String {
        self.profile.build.release.clone()
    }

    fn model(&self) -> String {
        self.profile.build.model.clone()
    }

    fn msv(&self) -> Option<String> {
        self.profile.build.msv.clone()
    }

    fn baseband_versions(&self) -> Vec<Option<String>> {
        self.profile.baseband_versions.clone()
    }

    fn proc_version(&self) -> Option<String> {
        self.profile.proc_version.clone()
    }

    fn selinux(&self) -> SelinuxState {
        self.profile.selinux
    }

    fn is_wifi_only(&self) -> bool {
        self.profile.wifi_only
    }

    fn feedback_reporter_package(&self) -> Option<String> {
        self.profile
            .feedback_reporter_package
            .clone()
            .filter(|p| !p.is_empty())
    }

    fn device_name(&self) -> String {
        self.state().device_name.clone()
    }

    fn carrier_config(&self) -> Option<CarrierConfig> {
        self.profile.carrier_config.clone()
    }

    fn resource_flag(&self, flag: ResourceFlag) -> bool {
        match flag {
            ResourceFlag::AdditionalSystemUpdateSetting => {
                self.profile.resources.additional_system_update_setting
            }
            ResourceFlag::ShowManual => self.profile.resources.show_manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ACTION_SYSTEM_UPDATE_SETTINGS;

    #[test]
    fn test_developer_mode_writes_are_recorded() {
        let platform = MemoryPlatform::new(DeviceProfile::default());
        assert!(!platform.is_development_settings_enabled());

        platform.set_development_settings_enabled(true);
        assert!(platform.is_development_settings_enabled());
        assert_eq!(platform.records().developer_mode_writes, vec![true]);
    }

    #[test]
    fn test_cancelled_messages_are_not_visible() {
        let platform = MemoryPlatform::new(DeviceProfile::default());
        let first = platform.show("one", MessageDuration::Short);
        let second = platform.show("two", MessageDuration::Long);
        assert_ne!(first, second);

        platform.cancel(first);
        assert_eq!(platform.visible_messages(), vec!["two".to_string()]);
    }

    #[test]
    fn test_enforcing_admin_requires_restriction() {
        let mut profile = DeviceProfile::default();
        profile.restrictions = vec![UserRestriction::NoFun];
        profile.enforcing_admin = Some(EnforcedAdmin {
            package: "com.example.dpc".into(),
            user_id: UserId(0),
        });
        let platform = MemoryPlatform::new(profile);

        assert!(platform
            .enforcing_admin(UserId(0), UserRestriction::NoFun)
            .is_some());
        assert!(platform
            .enforcing_admin(UserId(0), UserRestriction::NoDebuggingFeatures)
            .is_none());
        assert!(platform
            .enforcing_admin(UserId(10), UserRestriction::NoFun)
            .is_none());
    }

    #[test]
    fn test_resolution_and_missing_activities() {
        let mut profile = DeviceProfile::default();
        profile
            .resolvable_activities
            .insert(ACTION_SYSTEM_UPDATE_SETTINGS.into(), "System update".into());
        profile.missing_activities.push("com.example.Missing".into());
        let platform = MemoryPlatform::new(profile);

        let info = platform
            .resolve_system_activity(&Intent::new(ACTION_SYSTEM_UPDATE_SETTINGS))
            .unwrap();
        assert_eq!(info.label, "System update");

        let err = platform
            .start_activity(Intent::explicit("com.example", "com.example.Missing"))
            .unwrap_err();
        assert!(matches!(err, PlatformError::ActivityNotFound(_)));
        assert!(platform.records().started.is_empty());
    }

    #[test]
    fn test_broadcast_without_action_is_rejected() {
        let platform = MemoryPlatform::new(DeviceProfile::default());
        let err = platform.send_broadcast(Intent::default()).unwrap_err();
        assert!(matches!(err, PlatformError::BroadcastRejected(_)));
    }

    #[test]
    fn test_take_records_clears() {
        let platform = MemoryPlatform::new(DeviceProfile::default());
        platform.show("hello", MessageDuration::Short);
        assert_eq!(platform.take_records().messages.len(), 1);
        assert!(platform.records().messages.is_empty());
    }
}
