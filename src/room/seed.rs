use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, instrument, warn};

use super::models::RoomModel;
use crate::shared::AppError;

/// Loads the initial rooms from a JSON array of `{ "id", "name" }` objects
///
/// A missing file gives an empty seed. Unreadable or malformed files are errors.
#[instrument]
pub fn load_rooms(path: &Path) -> Result<Vec<RoomModel>, AppError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Seed file not found, starting with no rooms");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::Seed(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let rooms = parse_rooms(&contents)
        .map_err(|e| AppError::Seed(format!("failed to parse {}: {}", path.display(), e)))?;

    info!(path = %path.display(), room_count = rooms.len(), "Loaded seed rooms");
    Ok(rooms)
}

fn parse_rooms(contents: &str) -> Result<Vec<RoomModel>, serde_json::Error> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_rooms_keeps_file_order() {
        let rooms = parse_rooms(
            r#"[
                {"id": "b9c1", "name": "Cats"},
                {"id": "0aa2", "name": "Dogs"}
            ]"#,
        )
        .unwrap();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id, "b9c1");
        assert_eq!(rooms[0].name, "Cats");
        assert_eq!(rooms[1].id, "0aa2");
    }

    #[test]
    fn test_parse_rooms_rejects_missing_fields() {
        assert!(parse_rooms(r#"[{"id": "x"}]"#).is_err());
        assert!(parse_rooms(r#"{"id": "x", "name": "y"}"#).is_err());
    }

    #[test]
    fn test_load_rooms_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "name": "General"}}]"#).unwrap();

        let rooms = load_rooms(file.path()).unwrap();
        assert_eq!(
            rooms,
            vec![RoomModel {
                id: "1".to_string(),
                name: "General".to_string(),
            }]
        );
    }

    #[test]
    fn test_load_rooms_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        let rooms = load_rooms(&dir.path().join("rooms.json")).unwrap();
        assert!(rooms.is_empty());
    }

    #[test]
    fn test_load_rooms_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_rooms(file.path());
        assert!(matches!(result, Err(AppError::Seed(_))));
    }
}
