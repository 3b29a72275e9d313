//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Display controls
        .route("/increase", post(increase_handler))
        .route("/decrease", post(decrease_handler))
        .route("/adjust", post(adjust_handler))
        .route("/advance", post(advance_handler))
        .route("/display", get(display_handler))
        // Counter collection
        .route("/counters", post(add_counter_handler))
        .route("/counters/:name", delete(remove_counter_handler))
        // Settings overlay
        .route("/settings", get(settings_handler))
        .route("/settings/open", post(settings_open_handler))
        .route("/settings/close", post(settings_close_handler))
        .route("/settings/save", post(settings_save_handler))
        .route("/settings/reset", post(settings_reset_handler))
        .route("/settings/starting-life", put(starting_life_handler))
        .route("/settings/mode", post(mode_handler))
        .route("/settings/counter-select", post(counter_select_handler))
        .route("/settings/custom-counter", post(custom_counter_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
