//! Room service: room management operations and the events they emit.

use std::sync::Arc;

use crate::domain::{BoardEvent, NotificationHub, Room, RoomRegistry};
use crate::error::BoardError;

/// Orchestration layer for room management.
#[derive(Debug)]
pub struct RoomService {
    rooms: Arc<RoomRegistry>,
    hub: NotificationHub,
}

impl RoomService {
    /// Creates a new `RoomService`.
    #[must_use]
    pub fn new(rooms: Arc<RoomRegistry>, hub: NotificationHub) -> Self {
        Self { rooms, hub }
    }

    /// Adds a room. Emits [`BoardEvent::RoomsChanged`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateRoom`] if the label already exists.
    pub async fn add_room(&self, room_info: &str) -> Result<(), BoardError> {
        self.rooms.add(room_info).await?;

        let _ = self.hub.broadcast(BoardEvent::RoomsChanged);
        tracing::info!(room = room_info, "room added");
        Ok(())
    }

    /// Returns all rooms in insertion order.
    pub async fn list_rooms(&self) -> Vec<Room> {
        self.rooms.list().await
    }

    /// Deletes the given rooms in one batch, ignoring unknown labels.
    ///
    /// Emits [`BoardEvent::RoomsChanged`] even when zero labels matched:
    /// the caller asked for a deletion, displays refresh either way.
    /// Returns the number of rooms removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySelection`] if `labels` is empty;
    /// nothing is mutated and no event is emitted.
    pub async fn delete_rooms(&self, labels: &[String]) -> Result<usize, BoardError> {
        if labels.is_empty() {
            return Err(BoardError::EmptySelection);
        }
        let removed = self.rooms.delete_batch(labels).await;

        let _ = self.hub.broadcast(BoardEvent::RoomsChanged);
        tracing::info!(removed, "rooms deleted");
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::HubFrame;

    fn make_service() -> RoomService {
        RoomService::new(Arc::new(RoomRegistry::new()), NotificationHub::new(64))
    }

    #[tokio::test]
    async fn add_room_emits_rooms_changed() {
        let service = make_service();
        let mut observer = service.hub.register();

        assert!(service.add_room("A-1").await.is_ok());

        let Ok(HubFrame::Event(event)) = observer.frames.recv().await else {
            panic!("expected event");
        };
        assert_eq!(event, BoardEvent::RoomsChanged);
    }

    #[tokio::test]
    async fn duplicate_add_fails_and_keeps_one_room() {
        let service = make_service();
        assert!(service.add_room("A-1").await.is_ok());

        let result = service.add_room("A-1").await;
        assert!(matches!(result, Err(BoardError::DuplicateRoom(_))));
        assert_eq!(service.list_rooms().await.len(), 1);
    }

    #[tokio::test]
    async fn empty_deletion_fails_without_events() {
        let service = make_service();
        assert!(service.add_room("A-1").await.is_ok());
        let mut observer = service.hub.register();

        let result = service.delete_rooms(&[]).await;
        assert!(matches!(result, Err(BoardError::EmptySelection)));
        assert_eq!(service.list_rooms().await.len(), 1);
        assert!(matches!(
            observer.frames.try_recv(),
            Err(tokio::sync::broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn partial_deletion_removes_what_exists() {
        let service = make_service();
        assert!(service.add_room("A").await.is_ok());
        assert!(service.add_room("B").await.is_ok());

        let result = service
            .delete_rooms(&["A".to_string(), "Z".to_string()])
            .await;
        let Ok(removed) = result else {
            panic!("deletion failed");
        };
        assert_eq!(removed, 1);

        let labels: Vec<String> = service
            .list_rooms()
            .await
            .into_iter()
            .map(|r| r.room_info)
            .collect();
        assert_eq!(labels, vec!["B".to_string()]);
    }
}
