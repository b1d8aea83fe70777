//! Queue service: orchestrates queue operations and emits events.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    BoardEvent, NotificationHub, QueueEntry, QueueStatus, QueueStore, RoomRegistry, StudentRef,
};
use crate::error::BoardError;

/// Orchestration layer for all queue operations.
///
/// Stateless coordinator apart from the call lock: owns references to
/// [`QueueStore`] and [`RoomRegistry`] for state and [`NotificationHub`]
/// for event emission. Every mutation follows the pattern: mutate store →
/// emit events → return result.
///
/// # Concurrency
///
/// [`QueueService::call_next`] is a read-modify-write spanning the queue
/// store and the room registry. `call_lock` serializes it (together with
/// [`QueueService::clear_all`]) so that selecting the oldest waiting
/// entry, marking it called, updating the room, and a possible
/// compensating revert form one critical section.
#[derive(Debug)]
pub struct QueueService {
    store: Arc<QueueStore>,
    rooms: Arc<RoomRegistry>,
    hub: NotificationHub,
    call_lock: Mutex<()>,
}

impl QueueService {
    /// Creates a new `QueueService`.
    #[must_use]
    pub fn new(store: Arc<QueueStore>, rooms: Arc<RoomRegistry>, hub: NotificationHub) -> Self {
        Self {
            store,
            rooms,
            hub,
            call_lock: Mutex::new(()),
        }
    }

    /// Returns a reference to the inner [`NotificationHub`].
    #[must_use]
    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// Admits an examinee into the waiting queue.
    ///
    /// Duplicate card numbers are allowed (re-entry). Emits
    /// [`BoardEvent::QueueChanged`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StoreUnavailable`] when the store cannot
    /// accept the write.
    pub async fn admit(&self, id_card_number: &str, name: &str) -> Result<QueueEntry, BoardError> {
        let entry = self.store.admit(id_card_number, name).await?;

        let _ = self.hub.broadcast(BoardEvent::QueueChanged);
        tracing::info!(id = %entry.id, name, "examinee admitted");
        Ok(entry)
    }

    /// Returns the status view: current examinee plus the waiting prefix.
    pub async fn status(&self) -> QueueStatus {
        self.store.status().await
    }

    /// Returns every entry, oldest sign-in first.
    pub async fn list(&self) -> Vec<QueueEntry> {
        self.store.list().await
    }

    /// Returns the oldest waiting examinee without mutating anything.
    pub async fn peek_next(&self) -> Option<StudentRef> {
        self.store.peek_waiting().await
    }

    /// Calls the oldest waiting examinee to `seat_number`.
    ///
    /// Atomically marks the entry called and updates the matching room's
    /// occupant projection to `"<id> - <name>"`. Returns `Ok(None)`
    /// without mutating anything or emitting events when nothing is
    /// waiting. On success emits [`BoardEvent::SeatCalled`] then
    /// [`BoardEvent::QueueChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RoomNotFound`] when no room matches
    /// `seat_number`. The room is checked before any entry is touched,
    /// so a failed call leaves the waiting set untouched; if the room
    /// disappears mid-call, the assignment is rolled back.
    pub async fn call_next(&self, seat_number: &str) -> Result<Option<StudentRef>, BoardError> {
        let _guard = self.call_lock.lock().await;

        // Check the room up front so a missing room never marks an entry
        // called, even transiently for lock-free readers.
        if !self.rooms.contains(seat_number).await {
            return Err(BoardError::RoomNotFound(seat_number.to_string()));
        }

        let Some(called) = self.store.assign_next(seat_number).await else {
            return Ok(None);
        };

        if let Err(err) = self.rooms.set_occupant(seat_number, &called.summary()).await {
            // Compensating action for a room deleted mid-call: the entry
            // must return to the waiting set.
            self.store.revert_assignment(called.id).await;
            tracing::warn!(id = %called.id, seat = seat_number, "seat call rolled back");
            return Err(err);
        }

        let _ = self.hub.broadcast(BoardEvent::SeatCalled {
            student_id: called.id,
            student_name: called.name.clone(),
            seat_number: seat_number.to_string(),
        });
        let _ = self.hub.broadcast(BoardEvent::QueueChanged);

        tracing::info!(id = %called.id, name = %called.name, seat = seat_number, "examinee called");
        Ok(Some(called))
    }

    /// Removes every queue entry and resets the id sequence.
    ///
    /// Rooms are untouched. Emits [`BoardEvent::QueueChanged`]. Returns
    /// the number of entries removed.
    pub async fn clear_all(&self) -> usize {
        let _guard = self.call_lock.lock().await;
        let removed = self.store.clear().await;

        let _ = self.hub.broadcast(BoardEvent::QueueChanged);
        tracing::info!(removed, "queue cleared");
        removed
    }
}
