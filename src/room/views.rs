use axum::response::Html;

use super::models::RoomModel;
use crate::include_res;
use crate::res::{encode_path_segment, escape_html, page, render};

/// Room list with edit and delete links per row
pub fn rooms_page(rooms: &[RoomModel]) -> Html<String> {
    let room_rows = if rooms.is_empty() {
        include_res!(str, "/pages/no_rooms.html").to_string()
    } else {
        rooms
            .iter()
            .map(|room| {
                render(
                    include_res!(str, "/pages/room_row.html"),
                    &[
                        ("id", escape_html(&room.id).as_str()),
                        ("path_id", encode_path_segment(&room.id).as_str()),
                        ("name", escape_html(&room.name).as_str()),
                    ],
                )
            })
            .collect()
    };

    let content = render(
        include_res!(str, "/pages/rooms.html"),
        &[("room_rows", room_rows.as_str())],
    );
    page("Admin Rooms", &content)
}

pub fn add_room_page() -> Html<String> {
    page("Add Room", include_res!(str, "/pages/add.html"))
}

pub fn edit_room_page(room: &RoomModel) -> Html<String> {
    let content = render(
        include_res!(str, "/pages/edit.html"),
        &[
            ("path_id", encode_path_segment(&room.id).as_str()),
            ("name", escape_html(&room.name).as_str()),
        ],
    );
    page("Edit Room", &content)
}
