//! REST client for the provider's track-lookup endpoint.
//!
//! Wraps a single `GET` request authenticated with a bearer credential,
//! using [`reqwest`]. The [`TrackSource`] implementation normalizes every
//! failure into one error kind before it reaches the service layer.

use async_trait::async_trait;
use serde::Deserialize;

use melodex_core::error::CoreError;
use melodex_core::source::TrackSource;
use melodex_core::track::RawTrack;

/// HTTP client for a track-metadata provider instance.
pub struct AcrCloudClient {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
}

/// `{ "data": [...] }` envelope returned by the lookup endpoint.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    data: Vec<RawTrack>,
}

/// Errors from the provider REST layer.
#[derive(Debug, thiserror::Error)]
pub enum AcrCloudError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl AcrCloudClient {
    /// Create a new client for the provider endpoint.
    ///
    /// * `api_url`      - full lookup endpoint URL.
    /// * `access_token` - bearer credential sent on every request.
    pub fn new(api_url: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            access_token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, access_token: String) -> Self {
        Self {
            client,
            api_url,
            access_token,
        }
    }

    /// Look up raw track candidates by name and artist list.
    ///
    /// Sends `GET <api_url>?query=<json>&format=json` where `query` is a
    /// JSON object `{"track": name, "artists": [...]}`.
    pub async fn lookup(
        &self,
        name: &str,
        artist_names: &[String],
    ) -> Result<Vec<RawTrack>, AcrCloudError> {
        let query = serde_json::json!({
            "track": name,
            "artists": artist_names,
        });

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("query", query.to_string()), ("format", "json".into())])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let envelope: LookupResponse = Self::parse_response(response).await?;
        Ok(envelope.data)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`AcrCloudError::ApiError`] containing
    /// the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AcrCloudError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AcrCloudError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AcrCloudError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TrackSource for AcrCloudClient {
    async fn find_by_name_and_artists(
        &self,
        name: &str,
        artist_names: &[String],
    ) -> Result<Vec<RawTrack>, CoreError> {
        self.lookup(name, artist_names).await.map_err(|e| {
            tracing::warn!(track = name, error = %e, "Track source lookup failed");
            CoreError::ExternalSource(format!("Failed to fetch from track source: {e}"))
        })
    }
}
