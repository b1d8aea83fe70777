//! Queue entry: one examinee's check-in record.

use chrono::{DateTime, Utc};

use super::EntryId;

/// One examinee's check-in record, from admission to seat call.
///
/// An entry is *waiting* while `seat_number` and `call_time` are both
/// `None`, and *called* once both are set. The two fields change together
/// exactly once; `id` and `sign_in_time` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    /// Store-assigned sequence identifier (immutable after creation).
    pub id: EntryId,

    /// Examinee's ID card number. Not unique: the same card may re-enter
    /// the queue.
    pub id_card_number: String,

    /// Examinee's display name.
    pub name: String,

    /// Admission timestamp (immutable after creation).
    pub sign_in_time: DateTime<Utc>,

    /// Assigned seat label, set by the call operation.
    pub seat_number: Option<String>,

    /// Timestamp of the seat call, set together with `seat_number`.
    pub call_time: Option<DateTime<Utc>>,
}

impl QueueEntry {
    /// Returns `true` while no seat has been assigned.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.seat_number.is_none()
    }
}

/// Minimal reference to an entry: `{id, name}`.
///
/// Returned by the peek and call operations, where the caller only needs
/// to identify and announce the examinee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRef {
    /// Entry identifier.
    pub id: EntryId,
    /// Examinee's display name.
    pub name: String,
}

impl StudentRef {
    /// Formats the `"<id> - <name>"` summary used as a room's occupant
    /// projection and in the seat-call wire message.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }
}

/// One row of the status endpoint's waiting list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingStudent {
    /// Entry identifier.
    pub id: EntryId,
    /// Examinee's display name.
    pub name: String,
    /// Admission timestamp.
    pub sign_in_time: DateTime<Utc>,
}
