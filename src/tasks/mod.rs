//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod display_watcher;

// Re-export main functions
pub use display_watcher::display_watcher_task;
