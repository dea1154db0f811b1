//! Error types for the directive relay.
//!
//! Every variant here is fatal for the invocation: it is surfaced to the Lambda
//! runtime as a `Diagnostic`. Backend HTTP errors are not represented here
//! because they are translated into an [`ErrorEnvelope`](super::ErrorEnvelope)
//! and returned as a normal result.

use lambda_runtime::Diagnostic;
use std::fmt;

/// Failure classes of a single relay invocation.
#[derive(Debug)]
pub enum RelayError {
    /// `BASE_URL` is missing or unusable
    Configuration(String),
    /// The directive lacks a field the authenticated relay requires
    MalformedDirective(String),
    /// Connection failure, TLS failure or timeout talking to the backend
    Transport(String),
    /// The backend answered with a success status but a non-JSON body
    InvalidResponse(String),
}

impl RelayError {
    /// Stable error type reported to the Lambda runtime.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "ConfigurationError",
            Self::MalformedDirective(_) => "MalformedDirective",
            Self::Transport(_) => "TransportError",
            Self::InvalidResponse(_) => "InvalidResponse",
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::MalformedDirective(msg) => write!(f, "Malformatted request: {msg}"),
            Self::Transport(msg) => write!(f, "Backend request failed: {msg}"),
            Self::InvalidResponse(msg) => write!(f, "Invalid backend response: {msg}"),
        }
    }
}

impl std::error::Error for RelayError {}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            "timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        Self::Transport(format!("{kind}: {error}"))
    }
}

impl From<RelayError> for Diagnostic {
    fn from(error: RelayError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}
