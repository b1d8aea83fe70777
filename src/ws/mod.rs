//! WebSocket layer: connection handling and wire encoding.
//!
//! The WebSocket endpoint at `/ws` delivers state-change notifications
//! to display clients and relays peer messages between them.

pub mod connection;
pub mod handler;
pub mod wire;
