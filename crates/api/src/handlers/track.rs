//! Handlers for the `/tracks` resource.
//!
//! Every operation here requires an authenticated caller; each handler
//! declares the [`AuthUser`] extractor, so the check runs at the start of
//! every operation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use melodex_core::types::DbId;
use melodex_core::validation::track::{CreateTrackInput, ResolveTrackInput, UpdateTrackInput};
use melodex_db::models::track::Track;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::format::{format_artist_names, format_date, format_duration_ms, format_timestamp};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /tracks/resolve`.
///
/// `artists` is comma-separated so the query string stays flat:
/// `?name=Test%20Track&artists=Artist1,Artist2`.
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub name: Option<String>,
    pub artists: Option<String>,
}

impl ResolveParams {
    fn into_input(self) -> ResolveTrackInput {
        ResolveTrackInput {
            name: self.name,
            artist_names: self
                .artists
                .map(|s| s.split(',').map(|a| a.trim().to_string()).collect()),
        }
    }
}

/// Track representation for API responses: raw fields plus the display
/// formatting the presentation layer applies per field.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub id: DbId,
    pub name: String,
    pub artist_names: Vec<String>,
    /// Artist credits joined for single-line display.
    pub artist_name: String,
    pub duration_ms: i32,
    /// Duration formatted as `MM:SS`.
    pub duration: String,
    pub isrc: String,
    pub release_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Track> for TrackResponse {
    fn from(track: Track) -> Self {
        Self {
            id: track.id,
            artist_name: format_artist_names(&track.artist_names),
            duration: format_duration_ms(track.duration_ms),
            release_date: format_date(track.release_date),
            created_at: format_timestamp(track.created_at),
            updated_at: format_timestamp(track.updated_at),
            name: track.name,
            artist_names: track.artist_names,
            duration_ms: track.duration_ms,
            isrc: track.isrc,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/tracks
///
/// List all tracks.
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<impl IntoResponse> {
    let tracks = state.track_service.list().await?;
    let data: Vec<TrackResponse> = tracks.into_iter().map(TrackResponse::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tracks/resolve?name=...&artists=a,b
///
/// Resolve a track by name and artist list. On a local miss this falls back
/// to the external source and persists the result, so this GET may write.
pub async fn resolve(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ResolveParams>,
) -> AppResult<impl IntoResponse> {
    let input = params.into_input();
    let track = state.track_service.resolve_by_name_and_artists(&input).await?;
    Ok(Json(DataResponse {
        data: TrackResponse::from(track),
    }))
}

/// GET /api/v1/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let track = state.track_service.get_by_id(id).await?;
    Ok(Json(DataResponse {
        data: TrackResponse::from(track),
    }))
}

/// POST /api/v1/tracks
///
/// Create a new track.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateTrackInput>,
) -> AppResult<impl IntoResponse> {
    let track = state.track_service.create(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TrackResponse::from(track),
        }),
    ))
}

/// PUT /api/v1/tracks/{id}
///
/// Apply a partial update.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrackInput>,
) -> AppResult<impl IntoResponse> {
    let track = state.track_service.update_by_id(id, &input).await?;
    Ok(Json(DataResponse {
        data: TrackResponse::from(track),
    }))
}

/// DELETE /api/v1/tracks/{id}
///
/// Delete a track. Returns whether a row was removed; deleting a missing
/// track is not an error.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.track_service.delete_by_id(id).await?;
    Ok(Json(DataResponse { data: deleted }))
}
