//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Queue and room endpoints are mounted under `/api`; the health check
//! lives at the root.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}
