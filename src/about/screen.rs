//! The About screen.

use std::sync::Arc;

use crate::device_name::{DeviceNameBus, DeviceNameSubscription};
use crate::devmode::{DeveloperModeUnlockCounter, TapHistory, TapOutcome, UnlockState};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::platform::{
    Clock, Intent, Platform, PlatformError, ResourceFlag, UserRestriction, ACTION_BUG_REPORT,
    ACTION_MAIN, ACTION_SYSTEM_UPDATE_SETTINGS,
};
use crate::preference::layout::{RESET_ACTIVITY, SETTINGS_PACKAGE};
use crate::preference::{
    device_info_layout, keys, ClickResult, Flavor, PreferenceScreen, ScreenResult,
};

use super::device_info::{
    format_kernel_version, format_security_patch, join_baseband, msv_suffix, DEVICE_INFO_DEFAULT,
    KERNEL_VERSION_UNAVAILABLE,
};
use super::system_update::carrier_update_broadcast;

pub const PROPERTY_SECURITY_PATCH: &str = "ro.build.version.security_patch";
pub const PROPERTY_EQUIPMENT_ID: &str = "ro.ril.fccid";
pub const PROPERTY_DISPLAY_VERSION: &str = "ro.nenggala.display.version";
pub const PROPERTY_BUILD_DATE: &str = "ro.build.date";
pub const PROPERTY_SELINUX_STATUS: &str = "ro.build.selinux";
pub const PROPERTY_URL_SAFETYLEGAL: &str = "ro.url.safetylegal";

pub const PLATLOGO_PACKAGE: &str = "android";
pub const PLATLOGO_ACTIVITY: &str = "com.android.internal.app.PlatLogoActivity";

const SELINUX_DISABLED: &str = "Disabled";
const SELINUX_PERMISSIVE: &str = "Permissive";
const FACTORY_RESET_DESCRIPTION: &str = "Factory reset. Erases all data on this device";
const SYSTEM_UPDATE_DESCRIPTION: &str = "System update. Checks for software updates";

/// Device information, system update entry points, and the developer
/// mode unlock gesture.
///
/// Lifecycle follows the host: [`on_start`](Self::on_start),
/// [`on_resume`](Self::on_resume), any number of clicks, then
/// [`on_stop`](Self::on_stop). The screen can be started again after
/// stopping.
pub struct AboutScreen {
    platform: Arc<dyn Platform>,
    clock: Arc<dyn Clock>,
    device_names: Arc<DeviceNameBus>,
    flavor: Flavor,
    screen: PreferenceScreen,
    unlock: DeveloperModeUnlockCounter,
    logo_taps: TapHistory,
    subscription: Option<DeviceNameSubscription>,
}

impl AboutScreen {
    /// Inflate the layout for `flavor` and fill it from the platform.
    ///
    /// Fails if the layout lacks one of the information rows.
    pub fn new(
        flavor: Flavor,
        platform: Arc<dyn Platform>,
        clock: Arc<dyn Clock>,
        device_names: Arc<DeviceNameBus>,
    ) -> ScreenResult<Self> {
        let screen = PreferenceScreen::inflate(device_info_layout(flavor));
        let unlock = DeveloperModeUnlockCounter::new(platform.is_development_settings_enabled());

        let mut about = Self {
            platform,
            clock,
            device_names,
            flavor,
            screen,
            unlock,
            logo_taps: TapHistory::new(),
            subscription: None,
        };
        about.populate()?;

        log_event_with_fields(
            Event::ScreenCreated,
            &[("flavor", flavor.as_str()), ("layout", about.screen.layout())],
        );
        Ok(about)
    }

    fn populate(&mut self) -> ScreenResult<()> {
        let platform = Arc::clone(&self.platform);

        self.refresh_device_name();
        self.resolve_or_remove(keys::DEVICE_NAME);
        let screen = &mut self.screen;

        let firmware = screen.require_mut(keys::FIRMWARE_VERSION)?;
        firmware.set_summary(platform.release_or_codename());
        firmware.enabled = true;

        let patch = platform.get_or(PROPERTY_SECURITY_PATCH, "");
        if patch.is_empty() {
            screen.remove(keys::SECURITY_PATCH);
        } else {
            screen
                .require_mut(keys::SECURITY_PATCH)?
                .set_summary(format_security_patch(&patch));
        }

        let mut baseband = join_baseband(&platform.baseband_versions());
        if baseband.is_empty() {
            baseband = DEVICE_INFO_DEFAULT.to_string();
        }
        screen.require_mut(keys::BASEBAND_VERSION)?.set_summary(baseband);

        let msv = platform.msv();
        let model = format!("{}{}", platform.model(), msv_suffix(msv.as_deref()));
        screen.require_mut(keys::DEVICE_MODEL)?.set_summary(model);

        for (key, property) in [
            (keys::EQUIPMENT_ID, PROPERTY_EQUIPMENT_ID),
            (keys::DISPLAY_VERSION, PROPERTY_DISPLAY_VERSION),
            (keys::BUILD_DATE, PROPERTY_BUILD_DATE),
        ] {
            screen
                .require_mut(key)?
                .set_summary(platform.get_or(property, DEVICE_INFO_DEFAULT));
        }
        screen.require_mut(keys::DISPLAY_VERSION)?.enabled = true;

        let build_number = screen.require_mut(keys::BUILD_NUMBER)?;
        build_number.set_summary(platform.build_display());
        build_number.enabled = true;

        let kernel = platform
            .proc_version()
            .and_then(|v| format_kernel_version(&v))
            .unwrap_or_else(|| KERNEL_VERSION_UNAVAILABLE.to_string());
        screen.require_mut(keys::KERNEL_VERSION)?.set_summary(kernel);

        let selinux = platform.selinux();
        let selinux_row = screen.require_mut(keys::SELINUX_STATUS)?;
        if !selinux.enabled {
            selinux_row.set_summary(SELINUX_DISABLED);
        } else if !selinux.enforced {
            selinux_row.set_summary(SELINUX_PERMISSIVE);
        }

        if platform.get_or(PROPERTY_SELINUX_STATUS, "").is_empty() {
            screen.remove(keys::SELINUX_STATUS);
        }
        if platform.get_or(PROPERTY_URL_SAFETYLEGAL, "").is_empty() {
            screen.remove(keys::SAFETY_LEGAL);
        }
        if platform.get_or(PROPERTY_EQUIPMENT_ID, "").is_empty() {
            screen.remove(keys::EQUIPMENT_ID);
        }
        if platform.is_wifi_only() {
            screen.remove(keys::BASEBAND_VERSION);
        }
        if feedback_package(platform.as_ref()).is_none() {
            screen.remove(keys::DEVICE_FEEDBACK);
        }

        if let Some(reset) = screen.find_mut(keys::RESET) {
            reset.set_content_description(FACTORY_RESET_DESCRIPTION);
        }

        if let Some(reset_options) = screen.find_mut(keys::RESET_OPTIONS) {
            if platform.has_user_restriction(UserRestriction::NoFactoryReset) {
                reset_options.fragment = None;
            }
        }

        if let Some(update) = screen.find_mut(keys::SYSTEM_UPDATE_SETTINGS) {
            update.set_content_description(SYSTEM_UPDATE_DESCRIPTION);
        }
        if platform.is_admin_user() {
            let intent = Intent::new(ACTION_SYSTEM_UPDATE_SETTINGS);
            match platform.resolve_system_activity(&intent) {
                Some(info) => {
                    if let Some(update) = screen.find_mut(keys::SYSTEM_UPDATE_SETTINGS) {
                        update.title = info.label;
                    }
                }
                None => {
                    screen.remove(keys::SYSTEM_UPDATE_SETTINGS);
                }
            }
        } else {
            screen.remove(keys::SYSTEM_UPDATE_SETTINGS);
        }

        if !platform.resource_flag(ResourceFlag::AdditionalSystemUpdateSetting) {
            screen.remove(keys::ADDITIONAL_SYSTEM_UPDATE);
        }
        if !platform.resource_flag(ResourceFlag::ShowManual) {
            screen.remove(keys::MANUAL);
        }

        self.resolve_or_remove(keys::REGULATORY_INFO);
        Ok(())
    }

    /// Remove `key` unless its intent resolves to a system activity
    fn resolve_or_remove(&mut self, key: &str) {
        let resolves = match self.screen.find(key) {
            Some(row) => row
                .intent
                .as_ref()
                .is_some_and(|intent| self.platform.resolve_system_activity(intent).is_some()),
            None => return,
        };
        if !resolves {
            self.screen.remove(key);
        }
    }

    pub fn on_start(&mut self) {
        self.refresh_device_name();
        self.subscription = Some(self.device_names.subscribe());
        log_event_with_fields(Event::ScreenStarted, &[("layout", self.screen.layout())]);
    }

    pub fn on_resume(&mut self) {
        self.unlock.on_resume(self.platform.as_ref());
        self.update_tutorials();
        log_event_with_fields(Event::ScreenResumed, &[("layout", self.screen.layout())]);
    }

    pub fn on_stop(&mut self) {
        self.subscription = None;
        log_event_with_fields(Event::ScreenStopped, &[("layout", self.screen.layout())]);
    }

    /// Apply a pending device name update, if one arrived while started.
    /// Returns whether the summary was refreshed.
    pub fn poll_device_name_updates(&mut self) -> bool {
        let updated = self.subscription.as_ref().is_some_and(|s| s.drain());
        if updated {
            self.refresh_device_name();
            log_event(Event::DeviceNameRefreshed);
        }
        updated
    }

    /// Handle a tap on the row `key`
    pub fn on_preference_click(&mut self, key: &str) -> ClickResult {
        match key {
            keys::FIRMWARE_VERSION => {
                let now = self.clock.uptime_millis();
                if self.logo_taps.record_tap(now) && !self.launch_platform_logo() {
                    return ClickResult::not_handled();
                }
            }
            keys::BUILD_NUMBER | keys::DISPLAY_VERSION => {
                let entry = if key == keys::BUILD_NUMBER {
                    "SYSTEM_ABOUT_BUILD"
                } else {
                    "SYSTEM_ABOUT_DISPLAY_VERSION"
                };
                log_entry_selected(entry);

                if !self.platform.is_admin_user() {
                    log_event(Event::DevModeSecondaryUser);
                    return ClickResult::consumed();
                }

                let now = self.clock.uptime_millis();
                if self.unlock.on_qualifying_tap(now, self.platform.as_ref())
                    == TapOutcome::Restricted
                {
                    return ClickResult::consumed();
                }
            }
            keys::DEVICE_FEEDBACK => self.send_feedback(),
            keys::SYSTEM_UPDATE_SETTINGS => {
                log_entry_selected("SYSTEM_ABOUT_SYSTEM_UPDATE");
                if let Some(intent) = self
                    .platform
                    .carrier_config()
                    .and_then(|config| carrier_update_broadcast(&config))
                {
                    self.broadcast(intent);
                }
                self.start(Intent::new(ACTION_SYSTEM_UPDATE_SETTINGS));
            }
            keys::DEVICE_NAME => log_entry_selected("SYSTEM_ABOUT_DEVICE_NAME"),
            keys::RESET => {
                log_entry_selected("SYSTEM_ABOUT_FACTORY_RESET");
                self.start(Intent::explicit(SETTINGS_PACKAGE, RESET_ACTIVITY));
            }
            _ => {}
        }

        self.screen.default_click(key)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn screen(&self) -> &PreferenceScreen {
        &self.screen
    }

    pub fn unlock_state(&self) -> UnlockState {
        self.unlock.state()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    fn refresh_device_name(&mut self) {
        let name = self.platform.device_name();
        if let Some(row) = self.screen.find_mut(keys::DEVICE_NAME) {
            row.set_summary(name);
        }
    }

    fn update_tutorials(&mut self) {
        let resolved = match self.screen.find(keys::TUTORIALS) {
            Some(row) => row
                .intent
                .as_ref()
                .and_then(|intent| self.platform.resolve_system_activity(intent)),
            None => return,
        };
        if let Some(row) = self.screen.find_mut(keys::TUTORIALS) {
            row.visible = resolved.is_some();
            if let Some(info) = resolved {
                row.title = info.label;
            }
        }
    }

    /// Returns false if the easter egg is restricted for this user
    fn launch_platform_logo(&self) -> bool {
        let restriction = UserRestriction::NoFun;
        if self.platform.has_user_restriction(restriction) {
            if let Some(admin) = self
                .platform
                .enforcing_admin(self.platform.current_user(), restriction)
            {
                self.platform.show_admin_support_details(&admin);
            }
            log_event_with_fields(Event::EasterEggDenied, &[("restriction", restriction.key())]);
            return false;
        }

        let mut intent = Intent::new(ACTION_MAIN).with_component(PLATLOGO_PACKAGE, PLATLOGO_ACTIVITY);
        intent.put_extra_bool("is_lineage", false);
        if self.start(intent) {
            log_event(Event::EasterEggLaunched);
        }
        true
    }

    fn send_feedback(&self) {
        let Some(package) = feedback_package(self.platform.as_ref()) else {
            return;
        };
        let intent = Intent::new(ACTION_BUG_REPORT).with_package(package);
        let description = intent.to_string();
        if let Err(err) = self.platform.start_activity_for_result(intent, 0) {
            log_launch_failure(&description, &err);
        }
    }

    /// Start an activity; failures are logged and reported as false
    fn start(&self, intent: Intent) -> bool {
        let description = intent.to_string();
        match self.platform.start_activity(intent) {
            Ok(()) => true,
            Err(err) => {
                log_launch_failure(&description, &err);
                false
            }
        }
    }

    fn broadcast(&self, intent: Intent) {
        let description = intent.to_string();
        match self.platform.send_broadcast(intent) {
            Ok(()) => log_event_with_fields(
                Event::CarrierActionBroadcast,
                &[("intent", description.as_str())],
            ),
            Err(err) => log_launch_failure(&description, &err),
        }
    }
}

fn feedback_package(platform: &dyn Platform) -> Option<String> {
    platform
        .feedback_reporter_package()
        .filter(|p| !p.is_empty())
}

fn log_entry_selected(entry: &str) {
    log_event_with_fields(Event::EntrySelected, &[("entry", entry)]);
}

fn log_launch_failure(intent: &str, err: &PlatformError) {
    let error = err.to_string();
    log_event_with_fields(
        Event::ActivityLaunchFailed,
        &[("error", error.as_str()), ("intent", intent)],
    );
}
