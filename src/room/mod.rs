// Public API - what other modules can use
pub use handlers::{
    add_room_form, create_room, delete_room, edit_room_form, list_rooms, rename_room, ROOMS_PATH,
};
pub use service::RoomService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
mod service;
mod types;
mod views;

