//! tvsettings - the About and Reset Options screens of a TV settings app
//!
//! Screens are built over the collaborator traits in [`platform`] and can be
//! driven headless through [`cli`] against a [`config::DeviceProfile`].

pub mod about;
pub mod cli;
pub mod config;
pub mod device_name;
pub mod devmode;
pub mod observability;
pub mod platform;
pub mod preference;
pub mod vendor;
