//! Service layer: business logic orchestration.
//!
//! [`QueueService`] and [`RoomService`] coordinate store mutations and
//! emit events through the [`super::domain::NotificationHub`].

pub mod queue_service;
pub mod room_service;

pub use queue_service::QueueService;
pub use room_service::RoomService;
