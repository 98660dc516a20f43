//! Dashboard configuration parsed from environment variables.

pub const DEFAULT_API_BASE_URL: &str = "http://209.38.216.189:8000/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0} (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

/// Timeouts are opt-in; `None` keeps the HTTP client's default of waiting
/// indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl DashboardConfig {
    /// Build typed dashboard config from environment variables.
    ///
    /// Optional:
    /// - `SCHOLARSYNC_API_BASE_URL`: analytics API root, default [`DEFAULT_API_BASE_URL`]
    /// - `SCHOLARSYNC_REQUEST_TIMEOUT_SECS`: unset by default (no timeout)
    /// - `SCHOLARSYNC_CONNECT_TIMEOUT_SECS`: unset by default (no timeout)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the base URL has no HTTP scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("SCHOLARSYNC_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        Ok(Self {
            api_base_url: normalize_base_url(&base_url)?,
            request_timeout_secs: env_parse_u64("SCHOLARSYNC_REQUEST_TIMEOUT_SECS"),
            connect_timeout_secs: env_parse_u64("SCHOLARSYNC_CONNECT_TIMEOUT_SECS"),
        })
    }

    /// Replace the base URL, e.g. from a `--base-url` flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL has no HTTP scheme.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(base_url)?;
        Ok(self)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}

fn env_parse_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<u64>().ok())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
