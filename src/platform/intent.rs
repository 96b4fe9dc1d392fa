//! # Intents
//!
//! Descriptions of activities to start and broadcasts to send. The crate
//! only builds intents; delivering them is the host's job.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const ACTION_MAIN: &str = "android.intent.action.MAIN";
pub const ACTION_BUG_REPORT: &str = "android.intent.action.BUG_REPORT";
pub const ACTION_SYSTEM_UPDATE_SETTINGS: &str = "android.settings.SYSTEM_UPDATE_SETTINGS";

/// Fully-qualified activity name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentName {
    pub package: String,
    pub class: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// Extra payload value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
    Bool(bool),
    Str(Option<String>),
}

impl fmt::Display for ExtraValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraValue::Bool(b) => write!(f, "{}", b),
            ExtraValue::Str(Some(s)) => write!(f, "{}", s),
            ExtraValue::Str(None) => write!(f, "null"),
        }
    }
}

/// An activity or broadcast request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, ExtraValue>,
}

impl Intent {
    /// Implicit intent for an action
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    /// Explicit intent for a component
    pub fn explicit(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            component: Some(ComponentName::new(package, class)),
            ..Self::default()
        }
    }

    pub fn with_component(mut self, package: impl Into<String>, class: impl Into<String>) -> Self {
        self.component = Some(ComponentName::new(package, class));
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn put_extra_bool(&mut self, key: impl Into<String>, value: bool) {
        self.extras.insert(key.into(), ExtraValue::Bool(value));
    }

    pub fn put_extra_str(&mut self, key: impl Into<String>, value: Option<String>) {
        self.extras.insert(key.into(), ExtraValue::Str(value));
    }

    pub fn extra(&self, key: &str) -> Option<&ExtraValue> {
        self.extras.get(key)
    }

    /// True if the intent targets the given action or component class
    pub fn targets(&self, name: &str) -> bool {
        self.action.as_deref() == Some(name)
            || self.component.as_ref().is_some_and(|c| c.class == name)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intent {{")?;
        if let Some(ref action) = self.action {
            write!(f, " act={}", action)?;
        }
        if let Some(ref package) = self.package {
            write!(f, " pkg={}", package)?;
        }
        if let Some(ref component) = self.component {
            write!(f, " cmp={}", component)?;
        }
        if !self.extras.is_empty() {
            write!(f, " (has extras)")?;
        }
        write!(f, " }}")
    }
}

/// Result of resolving an intent to an installed activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveInfo {
    /// User-visible label of the resolved activity
    pub label: String,
}
