// Library crate for the chat room admin server
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod index;
pub mod res;
pub mod room;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::{build_router, App};
pub use config::ServerConfig;
pub use room::{
    models::RoomModel,
    repository::{InMemoryRoomRepository, RoomRepository},
    RoomService, ROOMS_PATH,
};
pub use shared::{AppError, AppState};
