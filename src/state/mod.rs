//! State management module
//!
//! This module contains the tracker snapshot, the display selector, the settings
//! overlay and the shared application state that owns them.

pub mod app_state;
pub mod counter;
pub mod selector;
pub mod session;
pub mod settings_state;
pub mod tracker_state;

// Re-export main types
pub use app_state::{AppState, Update};
pub use counter::{Counter, CounterKind, StyleTag, PRESET_COUNTERS};
pub use selector::DisplayTarget;
pub use session::SessionState;
pub use settings_state::SettingsState;
pub use tracker_state::{DisplayView, TrackerState};
