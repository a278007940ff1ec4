use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

use super::models::RoomModel;
use crate::shared::AppError;

/// Trait for room repository operations
///
/// Implementations keep rooms in insertion order and never hold two rooms
/// with the same ID.
#[async_trait]
pub trait RoomRepository {
    async fn list_rooms(&self) -> Result<Vec<RoomModel>, AppError>;
    async fn create_room(&self, room: &RoomModel) -> Result<(), AppError>;
    async fn get_room(&self, room_id: &str) -> Result<Option<RoomModel>, AppError>;

    /// Renames a room in place, returning the updated room or `None` if absent
    async fn rename_room(
        &self,
        room_id: &str,
        name: &str,
    ) -> Result<Option<RoomModel>, AppError>;

    /// Removes a room, returning whether anything was removed
    async fn delete_room(&self, room_id: &str) -> Result<bool, AppError>;
}

/// In-memory implementation of RoomRepository
///
/// A single mutex guards the whole collection. No operation awaits while
/// holding it.
pub struct InMemoryRoomRepository {
    rooms: Mutex<Vec<RoomModel>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(Vec::new()),
        }
    }

    /// Creates a repository pre-populated with seed rooms, keeping their order
    pub fn with_rooms(rooms: Vec<RoomModel>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(rooms.len());
        for room in &rooms {
            if !seen.insert(room.id.as_str()) {
                warn!(room_id = %room.id, "Duplicate room id in seed");
                return Err(AppError::Conflict(format!(
                    "Duplicate room id: {}",
                    room.id
                )));
            }
        }

        debug!(room_count = rooms.len(), "Seeded in-memory room repository");
        Ok(Self {
            rooms: Mutex::new(rooms),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<RoomModel>>, AppError> {
        self.rooms.lock().map_err(|_| {
            warn!("Room repository mutex poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self))]
    async fn list_rooms(&self) -> Result<Vec<RoomModel>, AppError> {
        debug!("Listing all rooms in memory");

        let rooms = self.lock()?;
        let room_list = rooms.clone();

        debug!(room_count = room_list.len(), "Rooms listed successfully in memory");
        Ok(room_list)
    }

    #[instrument(skip(self, room))]
    async fn create_room(&self, room: &RoomModel) -> Result<(), AppError> {
        debug!(room_id = %room.id, name = %room.name, "Creating room in memory");

        let mut rooms = self.lock()?;
        if rooms.iter().any(|r| r.id == room.id) {
            warn!(room_id = %room.id, "Room already exists in memory");
            return Err(AppError::Conflict("Room already exists".to_string()));
        }
        rooms.push(room.clone());

        debug!(room_id = %room.id, "Room created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_room(&self, room_id: &str) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = %room_id, "Fetching room from memory");

        let rooms = self.lock()?;
        let room = rooms.iter().find(|r| r.id == room_id).cloned();

        match &room {
            Some(r) => debug!(room_id = %room_id, name = %r.name, "Room found in memory"),
            None => debug!(room_id = %room_id, "Room not found in memory"),
        }

        Ok(room)
    }

    #[instrument(skip(self))]
    async fn rename_room(
        &self,
        room_id: &str,
        name: &str,
    ) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = %room_id, name = %name, "Renaming room in memory");

        let mut rooms = self.lock()?;
        let room = match rooms.iter_mut().find(|r| r.id == room_id) {
            Some(room) => room,
            None => {
                debug!(room_id = %room_id, "Room not found");
                return Ok(None);
            }
        };

        room.rename(name.to_string());

        info!(room_id = %room_id, name = %room.name, "Room renamed in memory");
        Ok(Some(room.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_room(&self, room_id: &str) -> Result<bool, AppError> {
        debug!(room_id = %room_id, "Deleting room from memory");

        let mut rooms = self.lock()?;
        let before = rooms.len();
        rooms.retain(|r| r.id != room_id);
        let removed = rooms.len() != before;

        if removed {
            info!(room_id = %room_id, "Room deleted from memory");
        } else {
            debug!(room_id = %room_id, "No room to delete");
        }

        Ok(removed)
    }
}
