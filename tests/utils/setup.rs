use std::sync::Arc;

use chatrooms::{
    build_router, room::seed, App, AppState, InMemoryRoomRepository, RoomModel, RoomService,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: App,
    pub service: RoomService,
}

pub struct TestSetupBuilder {
    rooms: Vec<RoomModel>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { rooms: vec![] }
    }

    pub fn with_rooms(mut self, rooms: Vec<(&str, &str)>) -> Self {
        self.rooms = rooms
            .into_iter()
            .map(|(id, name)| RoomModel {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();
        self
    }

    /// Seeds the registry from a JSON file, the same way the server starts up
    pub fn with_seed_file(mut self, json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        std::fs::write(&path, json).unwrap();

        self.rooms = seed::load_rooms(&path).unwrap();
        self
    }

    pub fn build(self) -> TestSetup {
        let repo = Arc::new(InMemoryRoomRepository::with_rooms(self.rooms).unwrap());
        let app = build_router(AppState::new(repo.clone()));

        TestSetup {
            app,
            service: RoomService::new(repo),
        }
    }
}
