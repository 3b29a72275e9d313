//! Display watcher background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, info, warn};

use crate::state::{AppState, DisplayView};

/// What changed between two rendered displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayChange {
    None,
    /// Same target, new value
    Value,
    /// The selector moved to another target
    Target,
}

impl DisplayChange {
    pub fn between(previous: &DisplayView, current: &DisplayView) -> Self {
        if previous.target != current.target || previous.label != current.label {
            Self::Target
        } else if previous.value != current.value {
            Self::Value
        } else {
            Self::None
        }
    }
}

/// Background task that logs what the display shows after every session change
pub async fn display_watcher_task(state: Arc<AppState>) {
    info!("Starting display watcher task");

    let mut state_rx = state.state_change_tx.subscribe();
    let mut previous = match state.get_session() {
        Ok(session) => session.tracker.display(),
        Err(e) => {
            error!("Failed to read initial session: {}", e);
            return;
        }
    };

    loop {
        match state_rx.recv().await {
            Ok(session) => {
                let current = session.tracker.display();
                match DisplayChange::between(&previous, &current) {
                    DisplayChange::Target => {
                        info!(
                            "Display now shows {} = {} [{}]",
                            current.label, current.value, current.style
                        );
                    }
                    DisplayChange::Value => {
                        debug!("{}: {} -> {}", current.label, previous.value, current.value);
                    }
                    DisplayChange::None => {
                        debug!("Session changed without touching the display");
                    }
                }
                previous = current;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Display watcher lagged behind by {} updates", skipped);
            }
            Err(RecvError::Closed) => {
                info!("State change channel closed, stopping display watcher");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CounterKind, TrackerState};

    #[test]
    fn classifies_display_changes() {
        let tracker = TrackerState::default().add_counter("Poison", CounterKind::Preset);
        let before = tracker.display();

        let adjusted = tracker.clone().adjust(-1);
        assert_eq!(DisplayChange::between(&before, &adjusted.display()), DisplayChange::Value);

        let advanced = tracker.clone().advance();
        assert_eq!(DisplayChange::between(&before, &advanced.display()), DisplayChange::Target);

        let removed = tracker.remove_counter("Poison");
        assert_eq!(DisplayChange::between(&before, &removed.display()), DisplayChange::None);
    }
}
