//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, DisplayView, Update};
use super::responses::{
    AddCounterRequest, AdjustRequest, ApiResponse, CounterSelectRequest, CustomCounterRequest,
    HealthResponse, SettingsResponse, StartingLifeRequest, StatusResponse,
};

type ApiResult<T> = Result<Json<T>, StatusCode>;

/// Turn the outcome of a state transition into a JSON response
fn respond(action: &str, result: Result<Update, String>, message: &str) -> ApiResult<ApiResponse> {
    match result {
        Ok(update) => {
            info!("{} endpoint called - changed={}", action, update.changed);
            Ok(Json(ApiResponse::from_update(message, update)))
        }
        Err(e) => {
            error!("Failed to apply {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /increase - Add one to the displayed value
pub async fn increase_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("increase", state.adjust(1), "Increased current value")
}

/// Handle POST /decrease - Subtract one from the displayed value
pub async fn decrease_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("decrease", state.adjust(-1), "Decreased current value")
}

/// Handle POST /adjust - Apply an arbitrary amount to the displayed value
pub async fn adjust_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdjustRequest>,
) -> ApiResult<ApiResponse> {
    respond("adjust", state.adjust(req.amount), &format!("Adjusted current value by {}", req.amount))
}

/// Handle POST /advance - Cycle the display to the next target
pub async fn advance_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("advance", state.advance(), "Advanced display")
}

/// Handle GET /display - Return what the display currently shows
pub async fn display_handler(State(state): State<Arc<AppState>>) -> ApiResult<DisplayView> {
    match state.get_session() {
        Ok(session) => Ok(Json(session.tracker.display())),
        Err(e) => {
            error!("Failed to get session state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /counters - Add a named counter
pub async fn add_counter_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddCounterRequest>,
) -> ApiResult<ApiResponse> {
    respond(
        "add-counter",
        state.add_counter(&req.name, req.kind),
        &format!("Added counter {}", req.name.trim()),
    )
}

/// Handle DELETE /counters/:name - Remove a named counter
pub async fn remove_counter_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<ApiResponse> {
    respond("remove-counter", state.remove_counter(&name), &format!("Removed counter {}", name))
}

/// Handle GET /settings - Return the overlay snapshot for pre-filling the form
pub async fn settings_handler(State(state): State<Arc<AppState>>) -> ApiResult<SettingsResponse> {
    let session = match state.get_session() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get session state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(SettingsResponse {
        life: session.tracker.life,
        starting_life: session.tracker.starting_life,
        commander_mode: session.tracker.commander_mode,
        counters: session.tracker.counters,
        presets: state.presets.clone(),
        settings: session.settings,
    }))
}

/// Handle POST /settings/open - Show the settings overlay
pub async fn settings_open_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("settings-open", state.open_settings(), "Settings opened")
}

/// Handle POST /settings/close - Hide the overlay and discard pending edits
pub async fn settings_close_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("settings-close", state.close_settings(), "Settings closed")
}

/// Handle POST /settings/save - Commit the pending starting life
pub async fn settings_save_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("settings-save", state.save_settings(), "Settings saved")
}

/// Handle POST /settings/reset - Reset life, commander damage and counters
pub async fn settings_reset_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("reset", state.reset(), "Tracker reset")
}

/// Handle PUT /settings/starting-life - Edit the pending starting life text
pub async fn starting_life_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartingLifeRequest>,
) -> ApiResult<ApiResponse> {
    respond("edit-starting-life", state.edit_starting_life(&req.value), "Starting life edited")
}

/// Handle POST /settings/mode - Toggle commander mode
pub async fn mode_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("toggle-mode", state.toggle_mode(), "Commander mode toggled")
}

/// Handle POST /settings/counter-select - Pick a preset or reveal the custom input
pub async fn counter_select_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CounterSelectRequest>,
) -> ApiResult<ApiResponse> {
    respond(
        "counter-select",
        state.select_counter(&req.choice),
        &format!("Selected {}", req.choice),
    )
}

/// Handle POST /settings/custom-counter - Submit a custom counter name
pub async fn custom_counter_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomCounterRequest>,
) -> ApiResult<ApiResponse> {
    respond(
        "custom-counter",
        state.submit_custom_counter(&req.name),
        &format!("Added custom counter {}", req.name.trim()),
    )
}

/// Handle GET /status - Return the full session and server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> ApiResult<StatusResponse> {
    let session = match state.get_session() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get session state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        display: session.tracker.display(),
        tracker: session.tracker,
        settings: session.settings,
        presets: state.presets.clone(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
