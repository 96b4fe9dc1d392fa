//! An ordered list of rows inflated from a layout.

use super::errors::{ScreenError, ScreenResult};
use super::layout::ScreenLayout;
use super::model::{ClickResult, Navigation, Preference};

/// The rows currently on a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceScreen {
    layout: &'static str,
    rows: Vec<Preference>,
}

impl PreferenceScreen {
    /// Build rows from a layout
    pub fn inflate(layout: ScreenLayout) -> Self {
        let rows = layout
            .rows
            .into_iter()
            .map(|def| Preference {
                key: def.key.to_string(),
                title: def.title.to_string(),
                summary: def.summary.map(str::to_string),
                kind: def.kind,
                enabled: def.enabled,
                visible: true,
                fragment: def.fragment.map(str::to_string),
                intent: def.intent.map(|i| i.to_intent()),
                content_description: None,
            })
            .collect();

        Self {
            layout: layout.name,
            rows,
        }
    }

    /// Name of the layout the screen was inflated from
    pub fn layout(&self) -> &'static str {
        self.layout
    }

    pub fn rows(&self) -> &[Preference] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Preference> {
        self.rows.iter().filter(|p| p.visible)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn find(&self, key: &str) -> Option<&Preference> {
        self.rows.iter().find(|p| p.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Preference> {
        self.rows.iter_mut().find(|p| p.key == key)
    }

    /// Like [`find_mut`](Self::find_mut), for rows the screen cannot do without
    pub fn require_mut(&mut self, key: &str) -> ScreenResult<&mut Preference> {
        let layout = self.layout;
        self.find_mut(key).ok_or_else(|| ScreenError::MissingPreference {
            layout: layout.to_string(),
            key: key.to_string(),
        })
    }

    /// Remove a row. Removing an absent row is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Preference> {
        let index = self.rows.iter().position(|p| p.key == key)?;
        Some(self.rows.remove(index))
    }

    /// What tapping a row does when the screen adds nothing of its own:
    /// open its fragment, else start its intent, else nothing.
    pub fn default_click(&self, key: &str) -> ClickResult {
        let Some(row) = self.find(key) else {
            return ClickResult::not_handled();
        };

        if let Some(ref fragment) = row.fragment {
            return ClickResult::navigate(Navigation::Fragment {
                name: fragment.clone(),
            });
        }

        if let Some(ref intent) = row.intent {
            return ClickResult::navigate(Navigation::Activity {
                intent: intent.clone(),
            });
        }

        ClickResult::not_handled()
    }
}
