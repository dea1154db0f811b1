//! Environment-based configuration.
//!
//! Values are read through a lookup function rather than `std::env` directly so
//! that tests can supply fixed values without touching the process environment.

use reqwest::Url;

use crate::models::error::RelayError;

/// Backend endpoint. Required.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Enables full event dumps at debug level when truthy.
pub const DEBUG_VAR: &str = "DEBUG";

/// Configuration read once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Backend base URL, as configured (surrounding whitespace removed)
    pub base_url: String,
    pub debug: bool,
}

impl RelayConfig {
    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Configuration` if `BASE_URL` is unset, empty, or not an http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                RelayError::Configuration(format!(
                    "Please set {BASE_URL_VAR} environment variable"
                ))
            })?;

        let parsed = Url::parse(&base_url).map_err(|e| {
            RelayError::Configuration(format!("{BASE_URL_VAR} is not a valid URL: {e}"))
        })?;
        if !matches!(parsed.scheme(), "https" | "http") {
            return Err(RelayError::Configuration(format!(
                "{BASE_URL_VAR} must be an http(s) URL, got scheme {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url,
            debug: debug_enabled(lookup),
        })
    }
}

/// Reads a variable from the process environment.
#[must_use]
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Whether `DEBUG` is set to a truthy value.
#[must_use]
pub fn debug_enabled<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(DEBUG_VAR).is_some_and(|value| is_truthy(&value))
}

/// Any non-empty value except `0`, `false`, `no` and `off` (case-insensitive).
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && !["0", "false", "no", "off"]
            .iter()
            .any(|falsy| value.eq_ignore_ascii_case(falsy))
}
