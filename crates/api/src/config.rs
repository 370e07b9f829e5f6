use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry duration).
    pub jwt: JwtConfig,
    /// External track-metadata provider configuration.
    pub acrcloud: AcrCloudConfig,
}

/// Configuration for the external track-metadata provider.
#[derive(Debug, Clone)]
pub struct AcrCloudConfig {
    /// Full lookup endpoint URL.
    pub api_url: String,
    /// Bearer credential sent on every lookup request.
    pub access_token: String,
}

impl AcrCloudConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var                  | Required |
    /// |--------------------------|----------|
    /// | `ACR_CLOUD_API_URL`      | **yes**  |
    /// | `ACR_CLOUD_ACCESS_TOKEN` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if either variable is not set.
    pub fn from_env() -> Self {
        let api_url = std::env::var("ACR_CLOUD_API_URL")
            .expect("ACR_CLOUD_API_URL must be set in the environment");
        let access_token = std::env::var("ACR_CLOUD_ACCESS_TOKEN")
            .expect("ACR_CLOUD_ACCESS_TOKEN must be set in the environment");

        Self {
            api_url,
            access_token,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let acrcloud = AcrCloudConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            acrcloud,
        }
    }
}
