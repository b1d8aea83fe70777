//! callboard server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use callboard::api;
use callboard::app_state::AppState;
use callboard::config::BoardConfig;
use callboard::domain::{NotificationHub, QueueStore, RoomRegistry};
use callboard::service::{QueueService, RoomService};
use callboard::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = BoardConfig::from_env().context("loading configuration")?;
    tracing::info!(addr = %config.listen_addr, "starting callboard");

    // Build domain layer
    let store = Arc::new(QueueStore::new(config.queue_capacity));
    let rooms = Arc::new(RoomRegistry::new());
    let hub = NotificationHub::new(config.hub_capacity);

    // Build service layer
    let queue_service = Arc::new(QueueService::new(store, Arc::clone(&rooms), hub.clone()));
    let room_service = Arc::new(RoomService::new(rooms, hub.clone()));

    // Build application state
    let app_state = AppState {
        queue_service,
        room_service,
        hub,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
