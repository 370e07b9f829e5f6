//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use sqlx::PgPool;

use melodex_api::auth::jwt::JwtConfig;
use melodex_api::config::{AcrCloudConfig, ServerConfig};
use melodex_api::routes;
use melodex_api::services::{AuthService, TrackService};
use melodex_api::state::AppState;
use melodex_core::error::CoreError;
use melodex_core::source::TrackSource;
use melodex_core::track::{RawAlbum, RawArtist, RawTrack};

/// Test double for the external metadata provider.
///
/// Returns a fixed candidate list (or a fixed failure) and counts how many
/// lookups were issued, so tests can assert the fallback path ran exactly
/// as often as expected.
pub struct MockSource {
    candidates: Vec<RawTrack>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockSource {
    pub fn with_candidates(candidates: Vec<RawTrack>) -> Self {
        Self {
            candidates,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::with_candidates(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            candidates: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups issued against this source.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrackSource for MockSource {
    async fn find_by_name_and_artists(
        &self,
        _name: &str,
        _artist_names: &[String],
    ) -> Result<Vec<RawTrack>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CoreError::ExternalSource(
                "Failed to fetch from track source: connection refused".into(),
            ));
        }
        Ok(self.candidates.clone())
    }
}

/// Build a provider candidate.
pub fn raw_track(name: &str, artists: &[&str]) -> RawTrack {
    RawTrack {
        name: name.to_string(),
        duration_ms: 300_000,
        isrc: "USABC1234567".to_string(),
        artists: artists
            .iter()
            .map(|a| RawArtist {
                name: a.to_string(),
            })
            .collect(),
        album: RawAlbum {
            release_date: "2021-01-01".to_string(),
        },
    }
}

/// JWT configuration with a known secret for tests.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        expiry_mins: 180,
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        acrcloud: AcrCloudConfig {
            api_url: "http://localhost:1/unused".to_string(),
            access_token: "unused".to_string(),
        },
    }
}

/// Build application state over a test pool and a mock source.
pub fn build_state(pool: PgPool, source: Arc<MockSource>) -> AppState {
    let config = test_config();
    AppState {
        pool: pool.clone(),
        track_service: TrackService::new(pool.clone(), source),
        auth_service: AuthService::new(pool, config.jwt.clone()),
        config: Arc::new(config),
    }
}

/// Build the full router over a test pool and a mock source.
pub fn build_app(pool: PgPool, source: Arc<MockSource>) -> Router {
    let state = build_state(pool, source);
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .with_state(state)
}
