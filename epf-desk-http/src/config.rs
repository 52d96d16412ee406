//! Backend connection settings.

use std::time::Duration;

use epf_desk_api::{ApiError, ApiResult};
use url::Url;

/// Environment variable holding the backend origin.
pub const API_URL_ENV: &str = "EPF_API_URL";
/// Environment variable holding the request timeout in seconds.
pub const API_TIMEOUT_ENV: &str = "EPF_API_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for talking to the EPF backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the `/api/epf/...` paths are resolved against.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout,
        })
    }

    /// Reads `EPF_API_URL` and `EPF_API_TIMEOUT_SECS`, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = match std::env::var(API_TIMEOUT_ENV) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ApiError::ConfigurationError(format!("{API_TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }
}

/// Parses an origin, rejecting anything that is not http(s).
///
/// A trailing slash is added so relative paths resolve below any path prefix.
pub fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| ApiError::ConfigurationError(format!("invalid API URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::ConfigurationError(format!(
            "unsupported API URL scheme '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_base_url_appends_slash() {
        let url = parse_base_url("http://10.0.0.5:8080").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:8080/");

        let prefixed = parse_base_url("https://example.com/epf").unwrap();
        assert_eq!(prefixed.join("api/epf/all").unwrap().as_str(), "https://example.com/epf/api/epf/all");
    }

    #[test]
    fn test_parse_base_url_rejects_bad_input() {
        assert!(matches!(parse_base_url("not a url"), Err(ApiError::ConfigurationError(_))));
        assert!(matches!(parse_base_url("ftp://example.com"), Err(ApiError::ConfigurationError(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(API_TIMEOUT_ENV);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        std::env::set_var(API_URL_ENV, "http://backend:9000");
        std::env::set_var(API_TIMEOUT_ENV, "5");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://backend:9000/");
        assert_eq!(config.timeout, Duration::from_secs(5));

        std::env::set_var(API_TIMEOUT_ENV, "soon");
        assert!(matches!(ClientConfig::from_env(), Err(ApiError::ConfigurationError(_))));

        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(API_TIMEOUT_ENV);
    }
}
