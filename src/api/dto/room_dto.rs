//! Room-related DTOs for add, list, and batch-delete operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Room;

/// Request body for `POST /api/exam_rooms/add`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRoomRequest {
    /// Unique room label, matched case-sensitively.
    pub room_info: String,
}

/// One room for `GET /api/exam_rooms`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    /// Room label.
    pub room_info: String,
    /// `"<id> - <name>"` of the current occupant, or `null`.
    pub current_occupant: Option<String>,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            room_info: room.room_info,
            current_occupant: room.current_occupant,
        }
    }
}

/// Request body for `POST /api/exam_rooms/delete`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteRoomsRequest {
    /// Labels of the rooms to delete. Must not be empty.
    pub rooms: Vec<String>,
}
