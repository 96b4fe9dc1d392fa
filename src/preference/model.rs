//! Preference rows and click results.

use serde::Serialize;

use crate::platform::Intent;

/// Row widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKind {
    Plain,
    /// Row that accepts an accessibility content description
    CustomContentDescription,
}

/// One settings row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preference {
    pub key: String,
    pub title: String,
    pub summary: Option<String>,
    pub kind: PreferenceKind,
    pub enabled: bool,
    pub visible: bool,
    /// Fragment opened when the row is tapped
    pub fragment: Option<String>,
    /// Activity started when the row is tapped
    pub intent: Option<Intent>,
    pub content_description: Option<String>,
}

impl Preference {
    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    /// Set the content description if the row kind supports one
    pub fn set_content_description(&mut self, description: impl Into<String>) -> bool {
        if self.kind != PreferenceKind::CustomContentDescription {
            return false;
        }
        self.content_description = Some(description.into());
        true
    }
}

/// Navigation requested by a tap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Navigation {
    /// Open a fragment inside the settings app
    Fragment { name: String },
    /// Start an activity
    Activity { intent: Intent },
}

/// Outcome of dispatching a tap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickResult {
    /// Whether the tap was consumed
    pub handled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

impl ClickResult {
    pub fn not_handled() -> Self {
        Self {
            handled: false,
            navigation: None,
        }
    }

    /// Consumed with no navigation
    pub fn consumed() -> Self {
        Self {
            handled: true,
            navigation: None,
        }
    }

    pub fn navigate(navigation: Navigation) -> Self {
        Self {
            handled: true,
            navigation: Some(navigation),
        }
    }
}
