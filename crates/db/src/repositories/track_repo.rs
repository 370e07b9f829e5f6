//! Repository for the `tracks` table.

use melodex_core::track::{artist_names_match, NewTrack, TrackPatch};
use melodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::track::Track;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, artist_names, duration_ms, isrc, release_date, created_at, updated_at";

/// Provides CRUD and fuzzy-lookup operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (name, artist_names, duration_ms, isrc, release_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.name)
            .bind(&input.artist_names)
            .bind(input.duration_ms)
            .bind(&input.isrc)
            .bind(input.release_date)
            .fetch_one(pool)
            .await
    }

    /// Find a track by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks in insertion order. No pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// Fuzzy lookup by name and artist list.
    ///
    /// Fetches rows whose `name` contains the queried name case-insensitively,
    /// then keeps those where at least one queried artist name matches at
    /// least one stored artist name (case-insensitive substring, either
    /// direction). Among multiple matches the first in store order wins;
    /// `ORDER BY id` pins that order.
    pub async fn find_by_name_and_artists(
        pool: &PgPool,
        name: &str,
        artist_names: &[String],
    ) -> Result<Option<Track>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tracks WHERE name ILIKE '%' || $1 || '%' ORDER BY id");
        let candidates = sqlx::query_as::<_, Track>(&query)
            .bind(name)
            .fetch_all(pool)
            .await?;

        Ok(candidates
            .into_iter()
            .find(|track| artist_names_match(&track.artist_names, artist_names)))
    }

    /// Apply a partial update. Only non-`None` fields in `patch` are applied;
    /// `updated_at` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &TrackPatch,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET
                name = COALESCE($2, name),
                artist_names = COALESCE($3, artist_names),
                duration_ms = COALESCE($4, duration_ms),
                isrc = COALESCE($5, isrc),
                release_date = COALESCE($6, release_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.artist_names)
            .bind(patch.duration_ms)
            .bind(&patch.isrc)
            .bind(patch.release_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
