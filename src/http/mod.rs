use async_trait::async_trait;
use lambda_runtime::tracing::debug;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::models::error::RelayError;

/// Connect timeout for the backend call
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Read timeout for the backend call
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// A single POST to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer_token: Option<String>,
    /// JSON-encoded event
    pub body: Vec<u8>,
}

/// Status and raw body of the backend answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Trait for HTTP client operations to enable testing with mocks.
///
/// This trait abstracts the backend call so tests can assert that no request
/// is made when validation fails.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a JSON POST and return the status with the raw body.
    ///
    /// Non-success statuses are returned as `Ok`; only transport failures are errors.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Transport` if the request cannot be sent or the body cannot be read.
    async fn post_json(&self, request: OutboundRequest) -> Result<UpstreamResponse, RelayError>;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client with the fixed connect/read timeouts and certificate verification on.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_default_timeouts() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(&self, request: OutboundRequest) -> Result<UpstreamResponse, RelayError> {
        debug!(url = %request.url, authenticated = request.bearer_token.is_some(), "Sending directive to backend");

        let mut builder = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse { status, body })
    }
}
