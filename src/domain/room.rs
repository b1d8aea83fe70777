//! Exam room with its current-occupant projection.

/// One exam room.
///
/// `room_info` is the unique, case-sensitive room label. `current_occupant`
/// is a projection of the most recent queue entry called to this room,
/// formatted `"<id> - <name>"`, or `None` if nobody has been called here
/// since the room was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique human-readable room label.
    pub room_info: String,

    /// `"<id> - <name>"` of the most recently called occupant.
    pub current_occupant: Option<String>,
}

impl Room {
    /// Creates a room with no occupant.
    #[must_use]
    pub fn new(room_info: impl Into<String>) -> Self {
        Self {
            room_info: room_info.into(),
            current_occupant: None,
        }
    }
}
