//! REST endpoint handlers organized by resource.

pub mod queue;
pub mod rooms;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(queue::routes()).merge(rooms::routes())
}
