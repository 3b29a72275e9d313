//! Life Tracker - A state-managed HTTP server for a tabletop life counter
//!
//! This is the main entry point for the life-tracker application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use life_tracker::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::display_watcher_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("life_tracker={},tower_http=info", config.log_level()))
        .init();

    info!("Starting life-tracker server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, commander={}, presets={:?}",
          config.host, config.port, config.commander, config.presets());

    // Create application state
    let tracker = config.initial_tracker();
    info!("Starting life: {}", tracker.life);
    let state = Arc::new(AppState::new(config.port, config.host.clone(), tracker, config.presets()));

    // Start the display watcher background task
    let watcher_state = Arc::clone(&state);
    tokio::spawn(async move {
        display_watcher_task(watcher_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /increase, /decrease, /adjust - Change the displayed value");
    info!("  POST /advance                      - Cycle the display");
    info!("  GET  /display                      - Current display");
    info!("  POST /counters, DELETE /counters/:name");
    info!("  GET  /settings, POST /settings/{{open,close,save,reset,mode,counter-select,custom-counter}}");
    info!("  PUT  /settings/starting-life");
    info!("  GET  /status, /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
