//! # About
//!
//! The "About" settings screen: device facts, system update entry points,
//! factory reset, and the build number gesture that unlocks developer mode.

mod device_info;
mod screen;
mod system_update;

pub use device_info::{
    format_kernel_version, format_security_patch, join_baseband, msv_suffix, DEVICE_INFO_DEFAULT,
    KERNEL_VERSION_UNAVAILABLE,
};
pub use screen::{
    AboutScreen, PLATLOGO_ACTIVITY, PLATLOGO_PACKAGE, PROPERTY_BUILD_DATE,
    PROPERTY_DISPLAY_VERSION, PROPERTY_EQUIPMENT_ID, PROPERTY_SECURITY_PATCH,
    PROPERTY_SELINUX_STATUS, PROPERTY_URL_SAFETYLEGAL,
};
pub use system_update::carrier_update_broadcast;
