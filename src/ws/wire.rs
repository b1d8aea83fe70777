//! Wire encoding of domain events.
//!
//! Observer clients speak a plain-string protocol with no envelope:
//! a literal tag (`"update_queue"`, `"update_rooms"`) or a
//! colon-delimited `"callout:<id> - <name>:<seatNumber>"`. The encoding
//! lives here, at the channel boundary, so the hub and services stay
//! free of string formatting.

use crate::domain::BoardEvent;

/// Encodes a [`BoardEvent`] to its wire string.
#[must_use]
pub fn encode(event: &BoardEvent) -> String {
    match event {
        BoardEvent::QueueChanged => "update_queue".to_string(),
        BoardEvent::RoomsChanged => "update_rooms".to_string(),
        BoardEvent::SeatCalled {
            student_id,
            student_name,
            seat_number,
        } => format!("callout:{student_id} - {student_name}:{seat_number}"),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::EntryId;

    #[test]
    fn queue_changed_tag() {
        assert_eq!(encode(&BoardEvent::QueueChanged), "update_queue");
    }

    #[test]
    fn rooms_changed_tag() {
        assert_eq!(encode(&BoardEvent::RoomsChanged), "update_rooms");
    }

    #[test]
    fn callout_format() {
        let event = BoardEvent::SeatCalled {
            student_id: EntryId::new(12),
            student_name: "Li Ming".to_string(),
            seat_number: "A-3".to_string(),
        };
        assert_eq!(encode(&event), "callout:12 - Li Ming:A-3");
    }
}
