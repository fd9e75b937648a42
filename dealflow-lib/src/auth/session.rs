//! Session-backed token provider

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccessToken;
use super::TokenProvider;
use crate::error::AuthError;

/// Holds the token of the signed-in user.
///
/// The identity provider integration calls [`sign_in`](Self::sign_in) when a
/// session starts or is renewed and [`sign_out`](Self::sign_out) when it
/// ends. Requests made while signed out fail with
/// [`AuthError::MissingToken`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use dealflow_lib::CrmClient;
/// use dealflow_lib::auth::{AccessToken, SessionTokenProvider};
///
/// async fn on_login(session: Arc<SessionTokenProvider>, token: String) {
///     session.sign_in(AccessToken::new(token)).await;
/// }
///
/// let session = Arc::new(SessionTokenProvider::new());
/// let _client = CrmClient::builder()
///     .url("https://crm.example.com")
///     .token_provider(session.clone())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SessionTokenProvider {
    token: RwLock<Option<AccessToken>>,
}

impl SessionTokenProvider {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token of a new or renewed session.
    pub async fn sign_in(&self, token: AccessToken) {
        log::debug!("Session token stored (expires: {:?})", token.expires_at);
        *self.token.write().await = Some(token);
    }

    /// Forgets the current token.
    pub async fn sign_out(&self) {
        log::debug!("Session token cleared");
        *self.token.write().await = None;
    }

    /// Returns `true` if a token is held, expired or not.
    pub async fn is_signed_in(&self) -> bool {
        self.token.read().await.is_some()
    }
}

#[async_trait]
impl TokenProvider for SessionTokenProvider {
    async fn get_token(&self, _resource: &str) -> Result<AccessToken, AuthError> {
        let guard = self.token.read().await;
        guard.clone().ok_or(AuthError::MissingToken)?.ensure_usable()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let session = SessionTokenProvider::new();
        assert!(matches!(session.get_token("x").await, Err(AuthError::MissingToken)));

        session.sign_in(AccessToken::new("abc")).await;
        assert_eq!(session.get_token("x").await.unwrap().access_token, "abc");

        session.sign_out().await;
        assert!(!session.is_signed_in().await);
        assert!(session.get_token("x").await.is_err());
    }

    #[tokio::test]
    async fn test_expired_session() {
        let session = SessionTokenProvider::new();
        session
            .sign_in(AccessToken::with_expiry("abc", Utc::now() - chrono::Duration::minutes(5)))
            .await;
        assert!(session.is_signed_in().await);
        assert!(matches!(session.get_token("x").await, Err(AuthError::TokenExpired)));
    }
}
