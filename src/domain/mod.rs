//! Domain layer: core types, stores, and the event system.
//!
//! This module contains the server-side domain model: entry identity,
//! queue entries and their store, exam rooms and their registry, domain
//! events, and the notification hub that broadcasts state changes to
//! connected observers.

pub mod board_event;
pub mod entry_id;
pub mod hub;
pub mod queue_entry;
pub mod queue_store;
pub mod room;
pub mod room_registry;

pub use board_event::BoardEvent;
pub use entry_id::EntryId;
pub use hub::{HubFrame, NotificationHub, Observer, ObserverId};
pub use queue_entry::{QueueEntry, StudentRef, WaitingStudent};
pub use queue_store::{QueueStatus, QueueStore, WAITING_LIMIT};
pub use room::Room;
pub use room_registry::RoomRegistry;
