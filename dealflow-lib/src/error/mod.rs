//! Error types

mod api;
mod auth;

pub use api::*;
pub use auth::*;

/// Top-level error returned by the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No usable access token.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The operation is not allowed with the given arguments.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl Error {
    /// Returns the HTTP status code if the API answered with an error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if repeating the call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_retryable())
    }
}
