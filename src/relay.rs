use lambda_runtime::tracing::{debug, info};
use serde_json::Value;

use crate::config::RelayConfig;
use crate::http::{HttpClient, OutboundRequest, UpstreamResponse};
use crate::models::{ErrorEnvelope, ErrorType, RelayError, bearer_token};

/// Path appended to `BASE_URL` by the authenticated relay
pub const SMART_HOME_PATH: &str = "/alexa/smarthome";

/// How a directive is checked and where it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Requires a v3 directive with a `BearerToken` scope; posts to `BASE_URL/alexa/smarthome`
    Authenticated,
    /// No validation; posts to `BASE_URL` as configured
    Passthrough,
}

impl Variant {
    /// Validates the event for this variant and builds the backend request.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::MalformedDirective` if the authenticated variant
    /// rejects the directive or the event cannot be serialized.
    pub fn prepare(self, config: &RelayConfig, event: &Value) -> Result<OutboundRequest, RelayError> {
        let (url, token) = match self {
            Self::Authenticated => {
                let token = bearer_token(event)?;
                let base = config.base_url.trim_end_matches('/');
                (format!("{base}{SMART_HOME_PATH}"), Some(token))
            }
            Self::Passthrough => (config.base_url.clone(), None),
        };

        let body = serde_json::to_vec(event).map_err(|e| {
            RelayError::MalformedDirective(format!("Failed to serialize event: {e}"))
        })?;

        Ok(OutboundRequest {
            url,
            bearer_token: token,
            body,
        })
    }
}

/// Maps the backend answer to the invocation result.
///
/// - status < 400: the body decoded as JSON, unmodified
/// - 401/403: `INVALID_AUTHORIZATION_CREDENTIAL` envelope carrying the body text
/// - any other status >= 400: `INTERNAL_ERROR` envelope carrying the body text
///
/// # Errors
///
/// Returns `RelayError::InvalidResponse` if a success body is not valid JSON.
pub fn translate_response(response: &UpstreamResponse) -> Result<Value, RelayError> {
    if let Some(error_type) = ErrorType::from_status(response.status) {
        let message = String::from_utf8_lossy(&response.body).into_owned();
        let envelope = ErrorEnvelope::new(error_type, message);
        return serde_json::to_value(envelope).map_err(|e| {
            RelayError::InvalidResponse(format!("Failed to build error envelope: {e}"))
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        RelayError::InvalidResponse(format!(
            "status {} with non-JSON body: {e}",
            response.status
        ))
    })
}

/// Forwards directives to the configured backend.
///
/// The HTTP client is built once and reused; configuration is read on every call.
pub struct Relay<C> {
    client: C,
    variant: Variant,
}

impl<C: HttpClient> Relay<C> {
    #[must_use]
    pub const fn new(client: C, variant: Variant) -> Self {
        Self { client, variant }
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Loads configuration through `lookup`, then forwards `event`.
    ///
    /// # Errors
    ///
    /// Returns a `RelayError` if configuration is missing, the directive is
    /// malformed, the backend is unreachable, or its success body is not JSON.
    pub async fn invoke<F>(&self, lookup: F, event: &Value) -> Result<Value, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = RelayConfig::from_lookup(lookup)?;
        self.forward(&config, event).await
    }

    /// Validates `event`, posts it once, and translates the answer. No retries.
    ///
    /// # Errors
    ///
    /// See [`Relay::invoke`].
    pub async fn forward(&self, config: &RelayConfig, event: &Value) -> Result<Value, RelayError> {
        if config.debug {
            debug!(event = %event, "Event");
        }

        let request = self.variant.prepare(config, event)?;
        let response = self.client.post_json(request).await?;

        info!(status = response.status, "Backend responded");
        translate_response(&response)
    }
}
