//! Registration, login, and token resolution.

use melodex_core::error::CoreError;
use melodex_core::types::DbId;
use melodex_core::validation::auth::{validate_credentials, CredentialsInput};
use melodex_core::validation::first_violation;
use melodex_db::models::user::User;
use melodex_db::repositories::UserRepo;
use melodex_db::DbPool;

use crate::auth::jwt::{generate_token, validate_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Caller identity resolved from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: DbId,
    pub username: String,
}

/// Registers users, authenticates them, and resolves tokens back to users.
#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
    jwt: JwtConfig,
}

impl AuthService {
    /// Create a service over a database pool and a JWT configuration.
    pub fn new(pool: DbPool, jwt: JwtConfig) -> Self {
        Self { pool, jwt }
    }

    /// Validate credentials, reject taken usernames, hash, and persist.
    ///
    /// The existence check and the insert are two separate store calls; the
    /// `uq_users_username` index backstops the race between them.
    pub async fn register(&self, input: &CredentialsInput) -> AppResult<User> {
        let creds = validate_credentials(input).map_err(first_violation)?;

        if UserRepo::find_by_username(&self.pool, &creds.username)
            .await?
            .is_some()
        {
            return Err(CoreError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(&creds.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let user = UserRepo::create(&self.pool, &creds.username, &password_hash).await?;
        tracing::info!(user_id = user.id, "Registered user");
        Ok(user)
    }

    /// Authenticate and issue a signed token.
    ///
    /// An unknown username and a wrong password fail identically so the
    /// caller cannot tell which field was wrong.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid username or password".into(),
                ))
            })?;

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

        if !password_valid {
            return Err(CoreError::Unauthorized("Invalid username or password".into()).into());
        }

        generate_token(user.id, &user.username, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
    }

    /// Resolve a token back to a caller identity.
    ///
    /// Any verification failure -- malformed, expired, bad signature --
    /// yields `None` rather than an error, so the API layer can treat "no
    /// valid session" uniformly. A verified token whose user no longer
    /// exists also yields `None`. Database errors still propagate.
    pub async fn resolve_user(&self, token: &str) -> AppResult<Option<AuthenticatedUser>> {
        let claims = match validate_token(token, &self.jwt) {
            Ok(claims) => claims,
            Err(_) => return Ok(None),
        };

        let user = UserRepo::find_by_id(&self.pool, claims.sub).await?;
        Ok(user.map(|u| AuthenticatedUser {
            id: u.id,
            username: u.username,
        }))
    }
}
