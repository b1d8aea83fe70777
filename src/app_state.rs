//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::NotificationHub;
use crate::service::{QueueService, RoomService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Queue service for admission, lookup, and seat-call logic.
    pub queue_service: Arc<QueueService>,
    /// Room service for room management.
    pub room_service: Arc<RoomService>,
    /// Notification hub for WebSocket observers.
    pub hub: NotificationHub,
}
