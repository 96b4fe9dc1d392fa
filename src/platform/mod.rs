//! # Platform collaborators
//!
//! Everything the settings screens need from the host lives behind the
//! traits in this module: users and restrictions, the persisted developer
//! mode flag, transient messages, system properties, intent resolution and
//! dispatch, and static device facts.
//!
//! `Platform` is the union of all of them. [`MemoryPlatform`] implements
//! every trait over a [`DeviceProfile`](crate::config::DeviceProfile) and
//! records the side effects, for the CLI and for tests.

mod clock;
mod device;
mod errors;
mod intent;
mod memory;
mod message;
mod user;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use device::{CarrierConfig, ResourceFlag, SelinuxState};
pub use errors::{PlatformError, PlatformResult};
pub use intent::{
    ComponentName, ExtraValue, Intent, ResolveInfo, ACTION_BUG_REPORT, ACTION_MAIN,
    ACTION_SYSTEM_UPDATE_SETTINGS,
};
pub use memory::{MemoryPlatform, PlatformRecords, ShownMessage};
pub use message::{MessageDuration, MessageHandle};
pub use user::{EnforcedAdmin, UserId, UserRestriction};

/// Users and the restriction policy
pub trait UserManager: Send + Sync {
    fn current_user(&self) -> UserId;

    /// Primary (admin) user, as opposed to secondary users
    fn is_admin_user(&self) -> bool;

    fn has_user_restriction(&self, restriction: UserRestriction) -> bool;

    /// The admin enforcing `restriction` on `user`, if one is known
    fn enforcing_admin(&self, user: UserId, restriction: UserRestriction) -> Option<EnforcedAdmin>;

    /// Show the "blocked by your administrator" notice
    fn show_admin_support_details(&self, admin: &EnforcedAdmin);
}

/// The persisted developer mode flag
pub trait DeveloperSettings: Send + Sync {
    fn is_development_settings_enabled(&self) -> bool;
    fn set_development_settings_enabled(&self, enabled: bool);
}

/// Transient on-screen messages
pub trait MessageSink: Send + Sync {
    fn show(&self, text: &str, duration: MessageDuration) -> MessageHandle;
    fn cancel(&self, handle: MessageHandle);
}

/// Read-only system properties
pub trait SystemProperties: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Property value, or `default` when unset or empty
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// Intent resolution
pub trait PackageManager: Send + Sync {
    /// Resolve `intent` to an activity shipped in the system image
    fn resolve_system_activity(&self, intent: &Intent) -> Option<ResolveInfo>;
}

/// Intent dispatch
pub trait ActivityManager: Send + Sync {
    fn start_activity(&self, intent: Intent) -> PlatformResult<()>;
    fn start_activity_for_result(&self, intent: Intent, request_code: i32) -> PlatformResult<()>;
    fn send_broadcast(&self, intent: Intent) -> PlatformResult<()>;
}

/// Static device facts
pub trait DeviceInfo: Send + Sync {
    /// Build display id
    fn build_display(&self) -> String;
    /// Android release or codename
    fn release_or_codename(&self) -> String;
    fn model(&self) -> String;
    /// Board MSV string, hex encoded
    fn msv(&self) -> Option<String>;
    /// One entry per radio; `None` for radios that report nothing
    fn baseband_versions(&self) -> Vec<Option<String>>;
    /// Contents of `/proc/version`
    fn proc_version(&self) -> Option<String>;
    fn selinux(&self) -> SelinuxState;
    fn is_wifi_only(&self) -> bool;
    fn feedback_reporter_package(&self) -> Option<String>;
    fn device_name(&self) -> String;
    fn carrier_config(&self) -> Option<CarrierConfig>;
    fn resource_flag(&self, flag: ResourceFlag) -> bool;
}

/// Every host service the screens consume
pub trait Platform:
    UserManager
    + DeveloperSettings
    + MessageSink
    + SystemProperties
    + PackageManager
    + ActivityManager
    + DeviceInfo
{
}

impl<T> Platform for T where
    T: UserManager
        + DeveloperSettings
        + MessageSink
        + SystemProperties
        + PackageManager
        + ActivityManager
        + DeviceInfo
{
}
