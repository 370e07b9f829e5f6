//! HTTP client for the external track-metadata provider.
//!
//! Implements the [`melodex_core::source::TrackSource`] port over the
//! provider's single "recognize track" REST endpoint.

mod client;

pub use client::{AcrCloudClient, AcrCloudError};
