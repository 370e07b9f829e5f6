//! Authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use melodex_core::error::CoreError;
use melodex_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The token is resolved through [`AuthService::resolve_user`], which also
/// confirms the user still exists; a missing header, an invalid token, and
/// a deleted user all reject identically.
///
/// [`AuthService::resolve_user`]: crate::services::AuthService::resolve_user
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub id: DbId,
    /// The user's username.
    pub username: String,
}

fn must_be_logged_in() -> AppError {
    AppError::Core(CoreError::Unauthorized("You must be logged in".into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(must_be_logged_in)?;

        // Accept both `Bearer <token>` and a bare token value.
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let user = state
            .auth_service
            .resolve_user(token)
            .await?
            .ok_or_else(must_be_logged_in)?;

        Ok(AuthUser {
            id: user.id,
            username: user.username,
        })
    }
}
