//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /resolve   -> resolve by name + artists
/// GET    /{id}      -> get by id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(track::list).post(track::create))
        .route("/resolve", get(track::resolve))
        .route(
            "/{id}",
            get(track::get_by_id)
                .put(track::update)
                .delete(track::delete),
        )
}
