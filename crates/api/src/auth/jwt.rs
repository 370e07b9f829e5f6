//! JWT token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. They are
//! never persisted; every request is verified statelessly.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use melodex_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The username at issue time.
    pub username: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes (default: 180, i.e. 3 hours).
    pub expiry_mins: i64,
}

/// Default token expiry in minutes (3 hours).
const DEFAULT_EXPIRY_MINS: i64 = 180;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_EXPIRY_MINS` | no       | `180`   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            expiry_mins,
        }
    }
}

/// Generate an HS256 token for the given user.
///
/// The token contains the user id, username, issue time, expiration, and a
/// unique `jti` claim.
pub fn generate_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature, expiration, and issued-at claims automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 180,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let token =
            generate_token(42, "alice", &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 180 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            username: "alice".to_string(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        let result = validate_token(&token, &config);
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            expiry_mins: 180,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            expiry_mins: 180,
        };

        let token =
            generate_token(1, "alice", &config_a).expect("token generation should succeed");

        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_malformed_token_fails() {
        let config = test_config();
        assert!(validate_token("not-a-jwt", &config).is_err());
        assert!(validate_token("", &config).is_err());
    }
}
