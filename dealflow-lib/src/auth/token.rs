//! TokenProvider trait and AccessToken

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::error::AuthError;

/// A bearer token issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The bearer token used for API authentication.
    pub access_token: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
    /// Refresh token, if the provider issued one.
    pub refresh_token: Option<String>,
}

impl AccessToken {
    /// Creates a new access token with just the token string.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
            refresh_token: None,
        }
    }

    /// Creates a new access token with expiration time.
    pub fn with_expiry(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: Some(expires_at),
            refresh_token: None,
        }
    }

    /// Adds a refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Returns `true` if the token has expired.
    ///
    /// Returns `false` if expiration time is unknown.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Utc::now() >= exp)
    }

    /// Returns `true` if the token will expire within the given duration.
    ///
    /// Returns `false` if expiration time is unknown.
    pub fn expires_within(&self, duration: chrono::Duration) -> bool {
        self.expires_at.is_some_and(|exp| Utc::now() + duration >= exp)
    }

    /// Returns `true` if a refresh token is available.
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Returns the token as a bearer authorization header value.
    pub fn as_bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Checks that the token can be sent.
    pub(crate) fn ensure_usable(self) -> Result<Self, AuthError> {
        if self.access_token.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }
        if self.is_expired() {
            return Err(AuthError::TokenExpired);
        }
        Ok(self)
    }
}

/// Source of access tokens for the CRM client.
///
/// The client calls `get_token` before each API request. Sign-in, renewal
/// and storage belong to the identity provider behind the implementation.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use dealflow_lib::auth::{AccessToken, TokenProvider};
/// use dealflow_lib::error::AuthError;
///
/// struct EnvToken;
///
/// #[async_trait]
/// impl TokenProvider for EnvToken {
///     async fn get_token(&self, _resource: &str) -> Result<AccessToken, AuthError> {
///         std::env::var("DEALFLOW_API_TOKEN")
///             .map(AccessToken::new)
///             .map_err(|_| AuthError::MissingToken)
///     }
/// }
/// ```
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Gets an access token for the API at `resource` (the base URL).
    async fn get_token(&self, resource: &str) -> Result<AccessToken, AuthError>;
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for std::sync::Arc<T> {
    async fn get_token(&self, resource: &str) -> Result<AccessToken, AuthError> {
        (**self).get_token(resource).await
    }
}

/// A token provider that always returns the same token.
///
/// Useful for scripts and tests.
///
/// # Example
///
/// ```
/// use dealflow_lib::auth::StaticTokenProvider;
///
/// let provider = StaticTokenProvider::new("my-access-token");
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    /// Creates a new static token provider with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(access_token),
        }
    }

    /// Creates a new static token provider from an existing AccessToken.
    pub fn from_token(token: AccessToken) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self, _resource: &str) -> Result<AccessToken, AuthError> {
        self.token.clone().ensure_usable()
    }
}
