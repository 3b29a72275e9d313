//! Life Tracker - A state-managed HTTP server for a tabletop life counter
//!
//! This library tracks a life total, optional commander damage and any number of
//! named counters, cycling a single display among them. Every change is a pure
//! transition on one session snapshot.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, SessionState, TrackerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
