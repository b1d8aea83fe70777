//! # callboard
//!
//! Check-in queue and seat-call service for exam venues. Examinees are
//! admitted into a strictly-ordered waiting queue, an operator calls the
//! oldest waiting examinee to a seat, and every connected display client
//! is notified in real time over WebSocket.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── QueueService / RoomService (service/)
//!     ├── NotificationHub (domain/)
//!     │
//!     ├── QueueStore (domain/)
//!     └── RoomRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
