//! Session snapshot combining the tracker with the settings overlay

use serde::{Deserialize, Serialize};

use super::{settings_state::CUSTOM_CHOICE, CounterKind, SettingsState, TrackerState};

/// Everything the widget shows, updated only through the transitions below
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub tracker: TrackerState,
    pub settings: SettingsState,
}

impl SessionState {
    /// Create a session with the overlay closed
    pub fn new(tracker: TrackerState) -> Self {
        let settings = SettingsState::closed(tracker.starting_life);
        Self { tracker, settings }
    }

    /// Apply a tracker-only transition
    pub fn map_tracker<F>(self, transition: F) -> Self
    where
        F: FnOnce(TrackerState) -> TrackerState,
    {
        Self {
            tracker: transition(self.tracker),
            ..self
        }
    }

    pub fn open_settings(self) -> Self {
        let settings = SettingsState::opened(self.tracker.starting_life);
        Self { settings, ..self }
    }

    pub fn close_settings(self) -> Self {
        let settings = SettingsState::closed(self.tracker.starting_life);
        Self { settings, ..self }
    }

    pub fn edit_starting_life(self, text: &str) -> Self {
        let settings = self.settings.with_starting_life_input(text);
        Self { settings, ..self }
    }

    /// Commit the pending starting life. Unparseable text is dropped.
    pub fn save_settings(self) -> Self {
        let tracker = self.tracker.set_starting_value(&self.settings.starting_life_input);
        let settings = self.settings.synced(tracker.starting_life);
        Self { tracker, settings }
    }

    /// Reset the tracker and close pending edit surfaces.
    ///
    /// The pending starting-life text is not applied; the committed value is.
    pub fn reset(self) -> Self {
        let tracker = self.tracker.reset();
        let settings = self
            .settings
            .synced(tracker.starting_life)
            .with_custom_input(false);
        Self { tracker, settings }
    }

    pub fn toggle_mode(self) -> Self {
        let tracker = self.tracker.toggle_mode();
        let settings = self.settings.synced(tracker.starting_life);
        Self { tracker, settings }
    }

    /// Handle a dropdown choice: reveal the custom input or add a preset
    pub fn select_counter(self, presets: &[String], choice: &str) -> Self {
        if choice == CUSTOM_CHOICE {
            let settings = self.settings.with_custom_input(true);
            return Self { settings, ..self };
        }
        if !presets.iter().any(|preset| preset == choice) {
            return self;
        }

        Self {
            tracker: self.tracker.add_counter(choice, CounterKind::Preset),
            settings: self.settings.with_custom_input(false),
        }
    }

    /// Add a custom counter from the free-text input.
    ///
    /// The input stays visible when the name is empty or already taken.
    pub fn submit_custom_counter(self, name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || self.tracker.has_counter(name) {
            return self;
        }

        Self {
            tracker: self.tracker.add_counter(name, CounterKind::Custom),
            settings: self.settings.with_custom_input(false),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(TrackerState::default())
    }
}
