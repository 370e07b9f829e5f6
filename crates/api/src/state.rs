use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{AuthService, TrackService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: melodex_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Track reconciliation service.
    pub track_service: TrackService,
    /// Registration / login / token-resolution service.
    pub auth_service: AuthService,
}
