//! Handlers for the `/auth` resource (register, login). Both are public.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use melodex_core::validation::auth::CredentialsInput;
use melodex_db::models::user::UserResponse;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new user account. The response never echoes the password field.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsInput>,
) -> AppResult<impl IntoResponse> {
    let user = state.auth_service.register(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns a signed token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .auth_service
        .login(&input.username, &input.password)
        .await?;
    Ok(Json(LoginResponse { token }))
}
