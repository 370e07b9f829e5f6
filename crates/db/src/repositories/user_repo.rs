//! Repository for the `users` table.

use melodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, created_at, updated_at";

/// Provides persistence operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
