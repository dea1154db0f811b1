//! Field extraction over an Alexa Smart Home directive.
//!
//! The directive is treated as opaque JSON and forwarded untouched; only the
//! fields needed to authenticate the outbound request are read here.

use serde::Deserialize;
use serde_json::Value;

use crate::models::error::RelayError;

/// The only Smart Home payload version the relay accepts
pub const SUPPORTED_PAYLOAD_VERSION: &str = "3";

/// Scope type carrying an OAuth access token
pub const BEARER_TOKEN_TYPE: &str = "BearerToken";

/// Authorization scope attached to a directive.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Scope {
    #[serde(rename = "type")]
    pub scope_type: Option<String>,
    pub token: Option<String>,
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Locates the scope object inside a directive.
///
/// Checked in order: `endpoint.scope` (control directives), `payload.grantee`
/// (`AcceptGrant`), then `payload.scope` (discovery). A JSON `null` counts as absent.
#[must_use]
pub fn find_scope(directive: &Value) -> Option<&Value> {
    non_null(directive.pointer("/endpoint/scope"))
        .or_else(|| non_null(directive.pointer("/payload/grantee")))
        .or_else(|| non_null(directive.pointer("/payload/scope")))
}

/// Validates the event and returns the bearer token of its directive scope.
///
/// # Errors
///
/// Returns `RelayError::MalformedDirective` if:
/// - `directive` is missing
/// - `directive.header.payloadVersion` is not `"3"`
/// - no scope is found, or the scope is not an object
/// - the scope type is not `BearerToken`, or the token is missing
pub fn bearer_token(event: &Value) -> Result<String, RelayError> {
    let directive = non_null(event.get("directive"))
        .ok_or_else(|| RelayError::MalformedDirective("missing directive".to_string()))?;

    let payload_version = directive
        .pointer("/header/payloadVersion")
        .and_then(Value::as_str);
    if payload_version != Some(SUPPORTED_PAYLOAD_VERSION) {
        return Err(RelayError::MalformedDirective(format!(
            "only payloadVersion == {SUPPORTED_PAYLOAD_VERSION} is supported, got {}",
            payload_version.unwrap_or("none")
        )));
    }

    let scope_value = find_scope(directive)
        .ok_or_else(|| RelayError::MalformedDirective("missing endpoint.scope".to_string()))?;

    let scope = Scope::deserialize(scope_value)
        .map_err(|e| RelayError::MalformedDirective(format!("invalid scope: {e}")))?;

    if scope.scope_type.as_deref() != Some(BEARER_TOKEN_TYPE) {
        return Err(RelayError::MalformedDirective(format!(
            "only {BEARER_TOKEN_TYPE} scope is supported"
        )));
    }

    scope
        .token
        .ok_or_else(|| RelayError::MalformedDirective("missing scope token".to_string()))
}
