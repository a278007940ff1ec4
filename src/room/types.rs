use serde::Deserialize;

/// Urlencoded form body for adding or renaming a room
///
/// A missing `name` field is accepted and treated as an empty name.
#[derive(Debug, Default, Deserialize)]
pub struct RoomForm {
    pub name: Option<String>,
}

impl RoomForm {
    /// The submitted name, untrimmed
    pub fn into_name(self) -> String {
        self.name.unwrap_or_default()
    }
}
