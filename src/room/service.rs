use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{models::RoomModel, repository::RoomRepository};
use crate::shared::AppError;

/// Service for the room registry operations
///
/// Lookups by ID use exact string equality. A missing room is reported as
/// `AppError::NotFound`, except on delete where it is a no-op.
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Lists all rooms in insertion order
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<RoomModel>, AppError> {
        debug!("Listing all rooms");

        let rooms = self.repository.list_rooms().await?;

        info!(room_count = rooms.len(), "Rooms retrieved successfully");
        Ok(rooms)
    }

    /// Creates a new room with a generated ID and appends it to the registry
    #[instrument(skip(self))]
    pub async fn create_room(&self, name: String) -> Result<RoomModel, AppError> {
        let room = RoomModel::new(name);
        debug!(room_id = %room.id, "Generated room ID");

        self.repository.create_room(&room).await?;

        info!(room_id = %room.id, name = %room.name, "Room created successfully");
        Ok(room)
    }

    /// Finds a room by ID
    #[instrument(skip(self))]
    pub async fn find_room(&self, room_id: &str) -> Result<RoomModel, AppError> {
        self.repository.get_room(room_id).await?.ok_or_else(|| {
            debug!(room_id = %room_id, "Room lookup failed");
            AppError::NotFound("Room not found".to_string())
        })
    }

    /// Renames a room, keeping its ID and position
    #[instrument(skip(self))]
    pub async fn rename_room(&self, room_id: &str, name: String) -> Result<RoomModel, AppError> {
        match self.repository.rename_room(room_id, &name).await? {
            Some(room) => {
                info!(room_id = %room.id, name = %room.name, "Room renamed successfully");
                Ok(room)
            }
            None => {
                warn!(room_id = %room_id, "Cannot rename missing room");
                Err(AppError::NotFound("Room not found".to_string()))
            }
        }
    }

    /// Deletes a room. Deleting an unknown ID succeeds without changes.
    #[instrument(skip(self))]
    pub async fn delete_room(&self, room_id: &str) -> Result<(), AppError> {
        if self.repository.delete_room(room_id).await? {
            info!(room_id = %room_id, "Room deleted successfully");
        } else {
            debug!(room_id = %room_id, "Delete requested for unknown room");
        }
        Ok(())
    }
}
