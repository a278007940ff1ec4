use axum::{routing::get, Router};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{index, room, shared::AppState};

/// Room administration routes, mounted under `/admin`
fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(room::list_rooms))
        .route(
            "/rooms/add",
            get(room::add_room_form).post(room::create_room),
        )
        .route(
            "/rooms/edit/:id",
            get(room::edit_room_form).post(room::rename_room),
        )
        .route("/rooms/delete/:id", get(room::delete_room))
}

/// The application service: the router behind trailing-slash trimming
pub type App = NormalizePath<Router>;

/// Builds the full application around an already constructed state
///
/// Trailing slashes are trimmed before routing, so `/admin/rooms/` reaches
/// the same handler as `/admin/rooms`.
pub fn build_router(state: AppState) -> App {
    let router = Router::new()
        .route("/", get(index::index))
        .nest("/admin", admin_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
