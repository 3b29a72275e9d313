//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::{CounterKind, SessionState, TrackerState};

/// Result of applying one transition
#[derive(Debug, Clone)]
pub struct Update {
    pub session: SessionState,
    /// False when the action degraded to a no-op
    pub changed: bool,
}

/// Main application state that owns the session and publishes every change
#[derive(Debug)]
pub struct AppState {
    /// Current session snapshot (tracker + settings overlay)
    pub session: Arc<Mutex<SessionState>>,
    /// Counters offered by the settings dropdown
    pub presets: Vec<String>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for session change notifications
    pub state_change_tx: broadcast::Sender<SessionState>,
}

impl AppState {
    /// Create a new AppState around an initial tracker
    pub fn new(port: u16, host: String, tracker: TrackerState, presets: Vec<String>) -> Self {
        let (state_change_tx, _) = broadcast::channel(100);

        Self {
            session: Arc::new(Mutex::new(SessionState::new(tracker))),
            presets,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            state_change_tx,
        }
    }

    /// Apply a transition to the session and notify listeners when it changed anything
    pub fn update_state<F>(&self, action: &str, transition: F) -> Result<Update, String>
    where
        F: FnOnce(SessionState) -> SessionState,
    {
        let mut session = self.session.lock()
            .map_err(|e| format!("Failed to lock session state: {}", e))?;

        let previous = session.clone();
        let next = transition(previous.clone());
        let changed = next != previous;
        *session = next.clone();

        // Publish while still holding the lock so subscribers see changes in order.
        // send() fails when nobody is subscribed.
        if changed && self.state_change_tx.receiver_count() > 0 {
            if let Err(e) = self.state_change_tx.send(next.clone()) {
                warn!("Failed to send state change notification: {}", e);
            }
        }
        drop(session);

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        if !changed {
            debug!("Action {} left the session unchanged", action);
        }

        Ok(Update { session: next, changed })
    }

    /// Add `amount` to the displayed value
    pub fn adjust(&self, amount: i64) -> Result<Update, String> {
        debug!("Adjusting current target by {}", amount);
        self.update_state("adjust", |s| s.map_tracker(|t| t.adjust(amount)))
    }

    /// Cycle the display to the next target
    pub fn advance(&self) -> Result<Update, String> {
        self.update_state("advance", |s| s.map_tracker(TrackerState::advance))
    }

    pub fn add_counter(&self, name: &str, kind: CounterKind) -> Result<Update, String> {
        info!("Adding counter: {} ({:?})", name, kind);
        self.update_state("add-counter", |s| s.map_tracker(|t| t.add_counter(name, kind)))
    }

    pub fn remove_counter(&self, name: &str) -> Result<Update, String> {
        info!("Removing counter: {}", name);
        self.update_state("remove-counter", |s| s.map_tracker(|t| t.remove_counter(name)))
    }

    pub fn toggle_mode(&self) -> Result<Update, String> {
        info!("Toggling commander mode");
        self.update_state("toggle-mode", SessionState::toggle_mode)
    }

    pub fn open_settings(&self) -> Result<Update, String> {
        self.update_state("settings-open", SessionState::open_settings)
    }

    pub fn close_settings(&self) -> Result<Update, String> {
        self.update_state("settings-close", SessionState::close_settings)
    }

    pub fn save_settings(&self) -> Result<Update, String> {
        info!("Saving settings");
        self.update_state("settings-save", SessionState::save_settings)
    }

    pub fn reset(&self) -> Result<Update, String> {
        info!("Resetting tracker");
        self.update_state("reset", SessionState::reset)
    }

    pub fn edit_starting_life(&self, text: &str) -> Result<Update, String> {
        self.update_state("edit-starting-life", |s| s.edit_starting_life(text))
    }

    pub fn select_counter(&self, choice: &str) -> Result<Update, String> {
        self.update_state("counter-select", |s| s.select_counter(&self.presets, choice))
    }

    pub fn submit_custom_counter(&self, name: &str) -> Result<Update, String> {
        self.update_state("custom-counter", |s| s.submit_custom_counter(name))
    }

    /// Get current session snapshot
    pub fn get_session(&self) -> Result<SessionState, String> {
        self.session.lock()
            .map(|session| session.clone())
            .map_err(|e| format!("Failed to lock session state: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DisplayTarget, PRESET_COUNTERS};

    fn app_state() -> AppState {
        let presets = PRESET_COUNTERS.iter().map(|p| p.to_string()).collect();
        AppState::new(0, "127.0.0.1".to_string(), TrackerState::default(), presets)
    }

    #[test]
    fn update_reports_whether_anything_changed() {
        let state = app_state();
        assert!(!state.advance().unwrap().changed);
        assert!(state.adjust(1).unwrap().changed);
        assert_eq!(state.get_session().unwrap().tracker.life, 21);
    }

    #[test]
    fn last_action_is_recorded_even_for_no_ops() {
        let state = app_state();
        state.remove_counter("Poison").unwrap();
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("remove-counter"));
        assert!(time.is_some());
    }

    #[test]
    fn select_counter_uses_configured_presets() {
        let state = AppState::new(
            0,
            "127.0.0.1".to_string(),
            TrackerState::default(),
            vec!["Treasure".to_string()],
        );
        assert!(!state.select_counter("Poison").unwrap().changed);
        let update = state.select_counter("Treasure").unwrap();
        assert!(update.changed);
        assert_eq!(update.session.tracker.counters[0].name, "Treasure");
    }

    #[tokio::test]
    async fn changes_are_broadcast_to_subscribers() {
        let state = app_state();
        let mut rx = state.state_change_tx.subscribe();

        state.add_counter("Poison", CounterKind::Preset).unwrap();
        state.advance().unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.tracker.counters.len(), 1);
        let second = rx.recv().await.unwrap();
        assert_eq!(second.tracker.target, DisplayTarget::Counter(0));
    }

    #[test]
    fn concurrent_updates_are_broadcast_in_commit_order() {
        let state = Arc::new(app_state());
        let mut rx = state.state_change_tx.subscribe();

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        state.adjust(1).unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let mut lives = Vec::new();
        while let Ok(session) = rx.try_recv() {
            lives.push(session.tracker.life);
        }
        let expected: Vec<i64> = (21..=120).collect();
        assert_eq!(lives, expected);
    }
}
