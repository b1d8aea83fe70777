//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain types stay out of the wire format: every endpoint maps to and
//! from these camelCase DTOs.

pub mod common_dto;
pub mod queue_dto;
pub mod room_dto;

pub use common_dto::*;
pub use queue_dto::*;
pub use room_dto::*;
