//! # Preferences
//!
//! Rows, screens of rows, and the static layouts screens are inflated from.

mod errors;
pub mod layout;
mod model;
mod screen;

pub use errors::{ScreenError, ScreenResult};
pub use layout::{device_info_layout, keys, reset_options_layout, Flavor, RowDef, ScreenLayout};
pub use model::{ClickResult, Navigation, Preference, PreferenceKind};
pub use screen::PreferenceScreen;
