#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    TrackNotFound(String),

    #[error("Registration error: User already exists")]
    UserAlreadyExists,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("External source error: {0}")]
    ExternalSource(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
