//! Main CrmClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::deserialize_id;
use crate::model::deserialize_lax_text;

/// Client for the CRM REST API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```no_run
/// use dealflow_lib::CrmClient;
/// use dealflow_lib::auth::StaticTokenProvider;
///
/// # async fn run() -> Result<(), dealflow_lib::error::Error> {
/// let client = CrmClient::builder()
///     .url("https://crm.example.com")
///     .token_provider(StaticTokenProvider::new("my-token"))
///     .build()?;
///
/// let me = client.whoami().await?;
/// let investors = client.investors().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CrmClient {
    inner: Arc<CrmClientInner>,
}

struct CrmClientInner {
    base_url: Url,
    token_provider: Arc<dyn TokenProvider>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl CrmClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> CrmClientBuilder<Missing, Missing> {
        CrmClientBuilder::new()
    }

    /// Validates the credentials against the API.
    ///
    /// Makes a `GET /api/me` request and returns the signed-in user.
    pub async fn whoami(&self) -> Result<WhoAmIResponse, Error> {
        let url = self.endpoint(&["me"])?;
        self.request_json(Method::GET, url, None).await
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Builds `{base}/api/{segments...}`, escaping each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::InvalidOperation(format!(
                "empty path segment in {:?}",
                segments
            )));
        }

        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and decodes the JSON response.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error> {
        let text = self.request(method, url, body).await?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => Err(ApiError::parse_with_body(e.to_string(), text).into()),
        }
    }

    /// Sends a request and returns the response body.
    ///
    /// Non-2xx responses become [`ApiError::Http`].
    pub(crate) async fn request(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<String, Error> {
        let token = self
            .inner
            .token_provider
            .get_token(self.inner.base_url.as_str())
            .await?;

        log::debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json")
            .bearer_auth(&token.access_token);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if status.is_success() {
            Ok(text)
        } else {
            log::warn!("{} {} failed with HTTP {}", method, url, status.as_u16());
            Err(ApiError::from_body(status.as_u16(), &text).into())
        }
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout).into(),
            _ => ApiError::from(err).into(),
        }
    }
}

/// The signed-in user, as returned by `GET /api/me`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WhoAmIResponse {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub display_name: Option<String>,
    /// Back-office role, e.g. `"staff"` or `"admin"`.
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub role: Option<String>,
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`CrmClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - `url` - The API base URL
/// - `token_provider` - A [`TokenProvider`] implementation
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dealflow_lib::CrmClient;
/// use dealflow_lib::auth::StaticTokenProvider;
///
/// let client = CrmClient::builder()
///     .url("https://crm.example.com")
///     .token_provider(StaticTokenProvider::new("token"))
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "https://crm.example.com/");
/// ```
pub struct CrmClientBuilder<U, P> {
    url: U,
    token_provider: P,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl CrmClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            token_provider: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for CrmClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CrmClientBuilder<Missing, P> {
    /// Sets the API base URL.
    pub fn url(self, url: impl Into<String>) -> CrmClientBuilder<Set<String>, P> {
        CrmClientBuilder {
            url: Set(url.into()),
            token_provider: self.token_provider,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> CrmClientBuilder<U, Missing> {
    /// Sets the token provider for authentication.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> CrmClientBuilder<U, Set<Arc<dyn TokenProvider>>> {
        CrmClientBuilder {
            url: self.url,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, P> CrmClientBuilder<U, P> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl CrmClientBuilder<Set<String>, Set<Arc<dyn TokenProvider>>> {
    /// Builds the [`CrmClient`].
    ///
    /// Fails with [`ApiError::InvalidUrl`] unless the URL is an absolute
    /// `http` or `https` URL.
    pub fn build(self) -> Result<CrmClient, Error> {
        let base_url = parse_base_url(&self.url.0)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(CrmClient {
            inner: Arc::new(CrmClientInner {
                base_url,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
