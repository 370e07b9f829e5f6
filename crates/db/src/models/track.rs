//! Track entity model.

use chrono::NaiveDate;
use melodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full track row from the `tracks` table.
///
/// Invariant (enforced by schema checks): `name` and `artist_names` are
/// never empty on a persisted row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub name: String,
    /// Ordered artist credits; order is display-relevant.
    pub artist_names: Vec<String>,
    /// Duration in milliseconds.
    pub duration_ms: i32,
    pub isrc: String,
    pub release_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
