//! Track reconciliation service.
//!
//! Owns the local-store-first, external-source-fallback resolution strategy
//! plus the plain CRUD operations on tracks. The store is consulted first
//! with a fuzzy name/artist match; only when it yields nothing is the
//! external provider asked, and its first candidate is normalized and
//! persisted before being returned.

use std::sync::Arc;

use melodex_core::error::CoreError;
use melodex_core::source::TrackSource;
use melodex_core::track::NewTrack;
use melodex_core::types::DbId;
use melodex_core::validation::first_violation;
use melodex_core::validation::track::{
    validate_new_track, validate_track_patch, validate_track_query, CreateTrackInput,
    ResolveTrackInput, UpdateTrackInput,
};
use melodex_db::models::track::Track;
use melodex_db::repositories::TrackRepo;
use melodex_db::DbPool;

use crate::error::AppResult;

/// Resolves, lists, and mutates catalogue tracks.
#[derive(Clone)]
pub struct TrackService {
    pool: DbPool,
    source: Arc<dyn TrackSource>,
}

impl TrackService {
    /// Create a service over a database pool and an external track source.
    pub fn new(pool: DbPool, source: Arc<dyn TrackSource>) -> Self {
        Self { pool, source }
    }

    /// Resolve a track by name and artist list.
    ///
    /// Looks in the local store first (case-insensitive substring match on
    /// the name, fuzzy artist overlap, first match in store order). On a
    /// miss, asks the external source and persists its first candidate.
    ///
    /// NOTE: this read may perform a write -- the fallback create is part of
    /// the contract, not an accident. Callers must expect mutation.
    pub async fn resolve_by_name_and_artists(
        &self,
        input: &ResolveTrackInput,
    ) -> AppResult<Track> {
        let query = validate_track_query(input).map_err(first_violation)?;

        if let Some(track) =
            TrackRepo::find_by_name_and_artists(&self.pool, &query.name, &query.artist_names)
                .await?
        {
            return Ok(track);
        }

        let candidates = self
            .source
            .find_by_name_and_artists(&query.name, &query.artist_names)
            .await?;

        if let Some(raw) = candidates.into_iter().next() {
            let new_track = NewTrack::from_raw(raw)?;
            let track = TrackRepo::create(&self.pool, &new_track).await?;
            tracing::info!(
                track_id = track.id,
                name = %track.name,
                "Created track from external source"
            );
            return Ok(track);
        }

        Err(CoreError::TrackNotFound(format!(
            "Track with name: {} and artist(s): {} not found",
            query.name,
            query.artist_names.join(", ")
        ))
        .into())
    }

    /// List all tracks. No filtering, no pagination.
    pub async fn list(&self) -> AppResult<Vec<Track>> {
        Ok(TrackRepo::list(&self.pool).await?)
    }

    /// Fetch a track by id, failing if it does not exist.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Track> {
        TrackRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::TrackNotFound(format!("Track with id: {id} not found")).into())
    }

    /// Validate and persist a new track.
    pub async fn create(&self, input: &CreateTrackInput) -> AppResult<Track> {
        let new_track = validate_new_track(input).map_err(first_violation)?;
        Ok(TrackRepo::create(&self.pool, &new_track).await?)
    }

    /// Validate and apply a partial update, failing if the id does not exist.
    pub async fn update_by_id(&self, id: DbId, input: &UpdateTrackInput) -> AppResult<Track> {
        let patch = validate_track_patch(input).map_err(first_violation)?;
        TrackRepo::update(&self.pool, id, &patch)
            .await?
            .ok_or_else(|| CoreError::TrackNotFound(format!("Track with id: {id} not found")).into())
    }

    /// Delete a track by id. Returns whether a row was removed; a missing
    /// row is not an error.
    pub async fn delete_by_id(&self, id: DbId) -> AppResult<bool> {
        Ok(TrackRepo::delete(&self.pool, id).await?)
    }
}
