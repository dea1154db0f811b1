use lambda_runtime::tracing::{error, info};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;

use crate::config::env_lookup;
use crate::http::HttpClient;
use crate::relay::Relay;

/// Lambda event handler. Forwards the directive to `BASE_URL` and returns the backend answer.
/// Logs the full event only when `DEBUG` is truthy, only `event_size` otherwise.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `ConfigurationError`: `BASE_URL` is missing or invalid
/// - `MalformedDirective`: the authenticated relay rejected the directive
/// - `TransportError`: the backend could not be reached or timed out
/// - `InvalidResponse`: the backend returned a success status with a non-JSON body
pub async fn function_handler<C: HttpClient>(
    relay: &Relay<C>,
    event: LambdaEvent<Value>,
) -> Result<Value, Diagnostic> {
    handle_with_lookup(relay, env_lookup, event).await
}

/// Same as [`function_handler`], reading configuration through `lookup`.
///
/// # Errors
///
/// See [`function_handler`].
pub async fn handle_with_lookup<C, F>(
    relay: &Relay<C>,
    lookup: F,
    event: LambdaEvent<Value>,
) -> Result<Value, Diagnostic>
where
    C: HttpClient,
    F: Fn(&str) -> Option<String>,
{
    let (event_payload, context) = event.into_parts();

    info!(
        request_id = %context.request_id,
        variant = ?relay.variant(),
        event_size = event_payload.to_string().len(),
        "Relaying directive"
    );

    relay.invoke(lookup, &event_payload).await.map_err(|e| {
        error!(error_type = e.error_type(), error = %e, "Directive relay failed");
        Diagnostic::from(e)
    })
}
