//! Tracing subscriber set-up.
//!
//! Mirrors the Lambda runtime's default subscriber (no target, no timestamp,
//! JSON when `AWS_LAMBDA_LOG_FORMAT=json`) but takes its level from `DEBUG`.

use tracing_subscriber::filter::LevelFilter;

/// Lambda's log format switch
pub const LOG_FORMAT_VAR: &str = "AWS_LAMBDA_LOG_FORMAT";

/// `DEBUG` when verbose logging is requested, `INFO` otherwise.
#[must_use]
pub const fn level_for(debug: bool) -> LevelFilter {
    if debug { LevelFilter::DEBUG } else { LevelFilter::INFO }
}

/// Installs the global subscriber. Call once, before the runtime starts.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(debug: bool, log_format: Option<&str>) -> Result<(), lambda_runtime::Error> {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_max_level(level_for(debug));

    if log_format.is_some_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
