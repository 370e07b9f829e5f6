//! Port for the external track-metadata provider.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::track::RawTrack;

/// Capability contract for the external "recognize track" lookup.
///
/// Implementations must normalize every failure -- transport, non-2xx
/// status, body decode -- into [`CoreError::ExternalSource`] before it
/// reaches the service layer. The provider is read-only: it never mutates
/// local state.
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// Look up raw track candidates by name and artist list.
    ///
    /// An empty vector means the provider knows no matching track; that is
    /// not an error.
    async fn find_by_name_and_artists(
        &self,
        name: &str,
        artist_names: &[String],
    ) -> Result<Vec<RawTrack>, CoreError>;
}
