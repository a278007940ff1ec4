use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{service::RoomService, types::RoomForm, views};
use crate::shared::{AppError, AppState};

/// Where every room mutation redirects back to
pub const ROOMS_PATH: &str = "/admin/rooms";

/// HTTP handler for the room list page
///
/// GET /admin/rooms
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let rooms = service.list_rooms().await?;

    Ok(views::rooms_page(&rooms))
}

/// HTTP handler for the empty add-room form
///
/// GET /admin/rooms/add
#[instrument(name = "add_room_form")]
pub async fn add_room_form() -> Html<String> {
    views::add_room_page()
}

/// HTTP handler for creating a room from the add form
///
/// POST /admin/rooms/add
#[instrument(name = "create_room", skip(state))]
pub async fn create_room(
    State(state): State<AppState>,
    Form(form): Form<RoomForm>,
) -> Result<Redirect, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.create_room(form.into_name()).await?;

    info!(room_id = %room.id, name = %room.name, "Room added");
    Ok(Redirect::to(ROOMS_PATH))
}

/// HTTP handler for the edit form of an existing room
///
/// GET /admin/rooms/edit/:id
/// Returns 404 if the room does not exist
#[instrument(name = "edit_room_form", skip(state))]
pub async fn edit_room_form(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.find_room(&room_id).await?;

    Ok(views::edit_room_page(&room))
}

/// HTTP handler for renaming a room from the edit form
///
/// POST /admin/rooms/edit/:id
/// Returns 404 if the room does not exist
#[instrument(name = "rename_room", skip(state))]
pub async fn rename_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Form(form): Form<RoomForm>,
) -> Result<Redirect, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.rename_room(&room_id, form.into_name()).await?;

    info!(room_id = %room.id, name = %room.name, "Room renamed");
    Ok(Redirect::to(ROOMS_PATH))
}

/// HTTP handler for deleting a room
///
/// GET /admin/rooms/delete/:id
/// Redirects to the list whether or not the room existed
#[instrument(name = "delete_room", skip(state))]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Redirect, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    service.delete_room(&room_id).await?;

    Ok(Redirect::to(ROOMS_PATH))
}
