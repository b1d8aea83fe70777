//! Room storage in insertion order.
//!
//! [`RoomRegistry`] keeps every [`Room`] in a `Vec` behind a
//! [`tokio::sync::RwLock`]. Insertion order is preserved so room listings
//! are deterministic. Labels are unique with case-sensitive matching.

use tokio::sync::RwLock;

use super::room::Room;
use crate::error::BoardError;

/// Central store for all exam rooms.
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: RwLock<Vec<Room>>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(Vec::new()),
        }
    }

    /// Adds a room with no occupant.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateRoom`] if a room with the same
    /// label already exists (case-sensitive exact match).
    pub async fn add(&self, room_info: &str) -> Result<(), BoardError> {
        let mut rooms = self.rooms.write().await;
        if rooms.iter().any(|r| r.room_info == room_info) {
            return Err(BoardError::DuplicateRoom(room_info.to_string()));
        }
        rooms.push(Room::new(room_info));
        Ok(())
    }

    /// Returns all rooms in insertion order.
    pub async fn list(&self) -> Vec<Room> {
        self.rooms.read().await.clone()
    }

    /// Deletes every room whose label appears in `labels`, in one batch.
    ///
    /// Labels that match no room are silently ignored. Returns the number
    /// of rooms actually removed.
    pub async fn delete_batch(&self, labels: &[String]) -> usize {
        let mut rooms = self.rooms.write().await;
        let before = rooms.len();
        rooms.retain(|r| !labels.iter().any(|l| *l == r.room_info));
        before - rooms.len()
    }

    /// Returns `true` if a room with the given label exists.
    pub async fn contains(&self, room_info: &str) -> bool {
        self.rooms
            .read()
            .await
            .iter()
            .any(|r| r.room_info == room_info)
    }

    /// Replaces the occupant projection of the room with the given label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RoomNotFound`] if no room matches.
    pub async fn set_occupant(&self, room_info: &str, occupant: &str) -> Result<(), BoardError> {
        let mut rooms = self.rooms.write().await;
        match rooms.iter_mut().find(|r| r.room_info == room_info) {
            Some(room) => {
                room.current_occupant = Some(occupant.to_string());
                Ok(())
            }
            None => Err(BoardError::RoomNotFound(room_info.to_string())),
        }
    }

    /// Returns the number of rooms in the registry.
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    /// Returns `true` if the registry contains no rooms.
    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_and_list_preserve_insertion_order() {
        let registry = RoomRegistry::new();
        assert!(registry.add("B-2").await.is_ok());
        assert!(registry.add("A-1").await.is_ok());

        let labels: Vec<String> = registry
            .list()
            .await
            .into_iter()
            .map(|r| r.room_info)
            .collect();
        assert_eq!(labels, vec!["B-2".to_string(), "A-1".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_label_is_rejected() {
        let registry = RoomRegistry::new();
        assert!(registry.add("A-1").await.is_ok());

        let result = registry.add("A-1").await;
        assert!(matches!(result, Err(BoardError::DuplicateRoom(_))));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn label_match_is_case_sensitive() {
        let registry = RoomRegistry::new();
        assert!(registry.add("a-1").await.is_ok());
        assert!(registry.add("A-1").await.is_ok());
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn delete_batch_ignores_unknown_labels() {
        let registry = RoomRegistry::new();
        assert!(registry.add("A").await.is_ok());
        assert!(registry.add("B").await.is_ok());

        let removed = registry
            .delete_batch(&["A".to_string(), "Z".to_string()])
            .await;
        assert_eq!(removed, 1);

        let labels: Vec<String> = registry
            .list()
            .await
            .into_iter()
            .map(|r| r.room_info)
            .collect();
        assert_eq!(labels, vec!["B".to_string()]);
    }

    #[tokio::test]
    async fn contains_matches_exact_label() {
        let registry = RoomRegistry::new();
        assert!(registry.add("A-1").await.is_ok());

        assert!(registry.contains("A-1").await);
        assert!(!registry.contains("a-1").await);
        assert!(!registry.contains("Z").await);
    }

    #[tokio::test]
    async fn set_occupant_updates_projection() {
        let registry = RoomRegistry::new();
        assert!(registry.add("A-1").await.is_ok());

        let result = registry.set_occupant("A-1", "1 - Wang").await;
        assert!(result.is_ok());

        let rooms = registry.list().await;
        let Some(room) = rooms.first() else {
            panic!("room missing");
        };
        assert_eq!(room.current_occupant.as_deref(), Some("1 - Wang"));
    }

    #[tokio::test]
    async fn set_occupant_on_missing_room_fails() {
        let registry = RoomRegistry::new();
        let result = registry.set_occupant("Z", "1 - Wang").await;
        assert!(matches!(result, Err(BoardError::RoomNotFound(_))));
    }
}
