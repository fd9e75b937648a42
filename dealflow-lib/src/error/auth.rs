//! Authentication error types

/// Errors raised while obtaining an access token.
///
/// The identity provider itself is external; these only describe why no
/// usable token could be handed to the client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The session token expired and must be renewed by the identity provider.
    #[error("Access token expired")]
    TokenExpired,

    /// No token is available, e.g. the user is signed out.
    #[error("No access token available")]
    MissingToken,

    /// The token provider failed.
    #[error("Token provider error: {0}")]
    Provider(String),
}
