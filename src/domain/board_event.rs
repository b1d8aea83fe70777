//! Domain events reflecting queue and room state mutations.
//!
//! Every successful mutation emits a [`BoardEvent`] through the
//! [`super::NotificationHub`]. Events are fire-and-forget signals that
//! something changed, not a replayable log; their string wire forms are
//! produced only at the WebSocket boundary (`ws::wire`).

use super::EntryId;

/// Event emitted after a state mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The queue changed: an examinee was admitted, called, or the queue
    /// was cleared.
    QueueChanged,

    /// The room set changed: a room was added or removed.
    RoomsChanged,

    /// An examinee was called to a seat.
    SeatCalled {
        /// Called entry's identifier.
        student_id: EntryId,
        /// Called examinee's display name.
        student_name: String,
        /// Seat label the examinee was called to.
        seat_number: String,
    },
}

impl BoardEvent {
    /// Returns the event type as a static string slice, for logging.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::QueueChanged => "queue_changed",
            Self::RoomsChanged => "rooms_changed",
            Self::SeatCalled { .. } => "seat_called",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn event_type_strings() {
        assert_eq!(BoardEvent::QueueChanged.event_type_str(), "queue_changed");
        assert_eq!(BoardEvent::RoomsChanged.event_type_str(), "rooms_changed");

        let called = BoardEvent::SeatCalled {
            student_id: EntryId::new(1),
            student_name: "Wang".to_string(),
            seat_number: "A-1".to_string(),
        };
        assert_eq!(called.event_type_str(), "seat_called");
    }
}
