//! In-process queue storage with atomic select-and-assign.
//!
//! [`QueueStore`] owns every [`QueueEntry`]: identity (a monotonic
//! sequence starting at 1, reset on clear), ordering (sign-in time,
//! ties broken by id), and seat-assignment state. All entries live
//! behind a single [`tokio::sync::RwLock`], so each public operation
//! is atomic with respect to the store.

use chrono::Utc;
use tokio::sync::RwLock;

use super::queue_entry::{QueueEntry, StudentRef, WaitingStudent};
use super::EntryId;
use crate::error::BoardError;

/// Consistent point-in-time view served by the status endpoint.
#[derive(Debug, Clone)]
pub struct QueueStatus {
    /// Name of the most recently called examinee, if any.
    pub current_student: Option<String>,
    /// Oldest-first waiting entries, truncated to the status limit.
    pub waiting_students: Vec<WaitingStudent>,
}

/// Maximum number of waiting entries the status endpoint reports.
pub const WAITING_LIMIT: usize = 15;

#[derive(Debug)]
struct StoreInner {
    entries: Vec<QueueEntry>,
    next_id: EntryId,
}

/// Central store for all queue entries.
///
/// # Concurrency
///
/// A single `RwLock` guards the entry list and the id sequence together,
/// so "select the oldest waiting entry and mark it called" is one atomic
/// step ([`QueueStore::assign_next`]) that can never interleave with a
/// concurrent assignment.
#[derive(Debug)]
pub struct QueueStore {
    inner: RwLock<StoreInner>,
    capacity: usize,
}

impl QueueStore {
    /// Creates an empty store that holds at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                entries: Vec::new(),
                next_id: EntryId::FIRST,
            }),
            capacity,
        }
    }

    /// Appends a new waiting entry with `sign_in_time = now`.
    ///
    /// Duplicate card numbers are allowed: a re-entering examinee gets a
    /// fresh entry with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StoreUnavailable`] when the store is full
    /// and cannot accept the write.
    pub async fn admit(&self, id_card_number: &str, name: &str) -> Result<QueueEntry, BoardError> {
        let mut inner = self.inner.write().await;
        if inner.entries.len() >= self.capacity {
            return Err(BoardError::StoreUnavailable);
        }

        let entry = QueueEntry {
            id: inner.next_id,
            id_card_number: id_card_number.to_string(),
            name: name.to_string(),
            sign_in_time: Utc::now(),
            seat_number: None,
            call_time: None,
        };
        inner.next_id = inner.next_id.next();
        inner.entries.push(entry.clone());
        Ok(entry)
    }

    /// Returns every entry, ordered by `(sign_in_time, id)` ascending.
    pub async fn list(&self) -> Vec<QueueEntry> {
        let inner = self.inner.read().await;
        let mut entries = inner.entries.clone();
        entries.sort_by(|a, b| (a.sign_in_time, a.id).cmp(&(b.sign_in_time, b.id)));
        entries
    }

    /// Computes the status view from one consistent snapshot.
    ///
    /// `current_student` is the name of the entry with the greatest
    /// `call_time` (ties broken by id) among called entries;
    /// `waiting_students` is the oldest-first waiting prefix, truncated
    /// to [`WAITING_LIMIT`].
    pub async fn status(&self) -> QueueStatus {
        let inner = self.inner.read().await;

        let current_student = inner
            .entries
            .iter()
            .filter(|e| !e.is_waiting())
            .max_by_key(|e| (e.call_time, e.id))
            .map(|e| e.name.clone());

        let mut waiting: Vec<&QueueEntry> =
            inner.entries.iter().filter(|e| e.is_waiting()).collect();
        waiting.sort_by(|a, b| (a.sign_in_time, a.id).cmp(&(b.sign_in_time, b.id)));

        let waiting_students = waiting
            .into_iter()
            .take(WAITING_LIMIT)
            .map(|e| WaitingStudent {
                id: e.id,
                name: e.name.clone(),
                sign_in_time: e.sign_in_time,
            })
            .collect();

        QueueStatus {
            current_student,
            waiting_students,
        }
    }

    /// Returns the oldest waiting entry without mutating anything.
    pub async fn peek_waiting(&self) -> Option<StudentRef> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .filter(|e| e.is_waiting())
            .min_by_key(|e| (e.sign_in_time, e.id))
            .map(|e| StudentRef {
                id: e.id,
                name: e.name.clone(),
            })
    }

    /// Atomically selects the oldest waiting entry and marks it called.
    ///
    /// Sets `seat_number` and `call_time = now` in the same write-lock
    /// scope as the selection. Returns `None` when nothing is waiting.
    pub async fn assign_next(&self, seat_number: &str) -> Option<StudentRef> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .entries
            .iter_mut()
            .filter(|e| e.is_waiting())
            .min_by_key(|e| (e.sign_in_time, e.id))?;

        entry.seat_number = Some(seat_number.to_string());
        entry.call_time = Some(Utc::now());
        Some(StudentRef {
            id: entry.id,
            name: entry.name.clone(),
        })
    }

    /// Compensating action for a failed call transaction: restores the
    /// entry with the given id to the waiting state.
    ///
    /// Returns `true` if an entry was reverted.
    pub async fn revert_assignment(&self, id: EntryId) -> bool {
        let mut inner = self.inner.write().await;
        match inner.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.seat_number = None;
                entry.call_time = None;
                true
            }
            None => false,
        }
    }

    /// Removes every entry and resets the id sequence to 1.
    ///
    /// Returns the number of entries removed.
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.write().await;
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.next_id = EntryId::FIRST;
        removed
    }

    /// Returns the number of entries in the store.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns `true` if the store contains no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}
