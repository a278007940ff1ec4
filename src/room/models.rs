use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat room record held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomModel {
    pub id: String,   // UUID v4 for created rooms, taken as-is from the seed file
    pub name: String, // Display name, not required to be unique
}

impl RoomModel {
    /// Creates a new room model with a random v4 UUID as its ID
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}
