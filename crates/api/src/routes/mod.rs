pub mod auth;
pub mod health;
pub mod track;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register (public)
/// /auth/login                 login → { token } (public)
///
/// /tracks                     list, create (auth required)
/// /tracks/resolve             resolve by name + artists (auth required)
/// /tracks/{id}                get, update, delete (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tracks", track::router())
}
