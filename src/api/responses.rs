//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Counter, CounterKind, DisplayView, SessionState, SettingsState, TrackerState, Update};

/// API response structure for every action endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: DisplayView,
    pub tracker: TrackerState,
    pub settings: SettingsState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, session: SessionState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            display: session.tracker.display(),
            tracker: session.tracker,
            settings: session.settings,
        }
    }

    /// Create an applied response
    pub fn applied(message: String, session: SessionState) -> Self {
        Self::new("applied".to_string(), message, session)
    }

    /// Create a response for an action that changed nothing
    pub fn ignored(message: String, session: SessionState) -> Self {
        Self::new("ignored".to_string(), message, session)
    }

    /// Pick `applied` or `ignored` from the outcome of a transition
    pub fn from_update(message: &str, update: Update) -> Self {
        if update.changed {
            Self::applied(message.to_string(), update.session)
        } else {
            Self::ignored(format!("{} (no change)", message), update.session)
        }
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub display: DisplayView,
    pub tracker: TrackerState,
    pub settings: SettingsState,
    pub presets: Vec<String>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Settings overlay snapshot used to pre-fill the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: SettingsState,
    pub life: i64,
    pub starting_life: i64,
    pub commander_mode: bool,
    pub counters: Vec<Counter>,
    pub presets: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjustRequest {
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCounterRequest {
    pub name: String,
    #[serde(default)]
    pub kind: CounterKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartingLifeRequest {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CounterSelectRequest {
    pub choice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomCounterRequest {
    pub name: String,
}
