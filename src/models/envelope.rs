//! Error envelope returned to Alexa when the backend rejects a directive.

use serde::{Deserialize, Serialize};

/// Alexa error payload type synthesized from a backend HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    InvalidAuthorizationCredential,
    InternalError,
}

impl ErrorType {
    /// Classifies a backend status code. Returns `None` for non-error statuses (< 400).
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            401 | 403 => Some(Self::InvalidAuthorizationCredential),
            s if s >= 400 => Some(Self::InternalError),
            _ => None,
        }
    }
}

/// `{ "event": { "payload": { "type": ..., "message": ... } } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub event: ErrorEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub payload: ErrorPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            event: ErrorEvent {
                payload: ErrorPayload {
                    error_type,
                    message: message.into(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_classification() {
        assert_eq!(ErrorType::from_status(200), None);
        assert_eq!(ErrorType::from_status(302), None);
        assert_eq!(ErrorType::from_status(399), None);
        assert_eq!(
            ErrorType::from_status(401),
            Some(ErrorType::InvalidAuthorizationCredential)
        );
        assert_eq!(
            ErrorType::from_status(403),
            Some(ErrorType::InvalidAuthorizationCredential)
        );
        assert_eq!(ErrorType::from_status(400), Some(ErrorType::InternalError));
        assert_eq!(ErrorType::from_status(404), Some(ErrorType::InternalError));
        assert_eq!(ErrorType::from_status(503), Some(ErrorType::InternalError));
    }

    #[test]
    fn test_envelope_wire_shape() {
        let envelope = ErrorEnvelope::new(ErrorType::InvalidAuthorizationCredential, "bad token");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "event": {
                    "payload": {
                        "type": "INVALID_AUTHORIZATION_CREDENTIAL",
                        "message": "bad token"
                    }
                }
            })
        );
    }

    #[test]
    fn test_internal_error_wire_name() {
        let value = serde_json::to_value(ErrorType::InternalError).unwrap();
        assert_eq!(value, json!("INTERNAL_ERROR"));
    }
}
