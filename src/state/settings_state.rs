//! Settings overlay state

use serde::{Deserialize, Serialize};

/// Dropdown entry that reveals the free-text counter name input
pub const CUSTOM_CHOICE: &str = "custom";

/// Transient edit surface shown over the counter display.
///
/// Edits to the starting life stay pending until saved; closing the overlay
/// discards them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsState {
    pub open: bool,
    /// Raw, unvalidated starting-life text
    pub starting_life_input: String,
    pub custom_input_visible: bool,
}

impl SettingsState {
    /// Show the overlay pre-filled with the committed starting life
    pub fn opened(starting_life: i64) -> Self {
        Self {
            open: true,
            starting_life_input: starting_life.to_string(),
            custom_input_visible: false,
        }
    }

    /// Hide the overlay, dropping anything pending
    pub fn closed(starting_life: i64) -> Self {
        Self {
            open: false,
            ..Self::opened(starting_life)
        }
    }

    pub fn with_starting_life_input(self, text: &str) -> Self {
        Self {
            starting_life_input: text.to_string(),
            ..self
        }
    }

    /// Replace the pending text with the committed value
    pub fn synced(self, starting_life: i64) -> Self {
        self.with_starting_life_input(&starting_life.to_string())
    }

    pub fn with_custom_input(self, visible: bool) -> Self {
        Self {
            custom_input_visible: visible,
            ..self
        }
    }
}
