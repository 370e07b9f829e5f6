//! Service layer: business logic between the HTTP surface and the stores.
//!
//! Services receive their collaborators through their constructors -- no
//! ambient registry. Handlers hold them via [`crate::state::AppState`].

pub mod auth_service;
pub mod track_service;

pub use auth_service::{AuthService, AuthenticatedUser};
pub use track_service::TrackService;
