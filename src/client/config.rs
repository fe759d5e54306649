//! Client configuration.

use secrecy::SecretString;
use std::time::Duration;

/// Base URL for the VirusTotal API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.virustotal.com/api/v3";

/// Default interval between poll attempts in the wait loop.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Default maximum number of poll attempts in the wait loop.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Configuration for a [`Client`](crate::client::Client).
///
/// The API key is held as a [`SecretString`] so it is redacted from debug
/// output. All other fields have production defaults and can be adjusted
/// with the `with_*` builders.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key (kept secret).
    pub api_key: SecretString,

    /// Base URL for the API.
    pub base_url: String,

    /// Request timeout for individual HTTP calls.
    pub timeout: Duration,

    /// Interval between poll attempts when waiting for completion.
    pub poll_interval: Duration,

    /// Maximum number of poll attempts when waiting for completion.
    pub max_attempts: u32,
}

impl ClientConfig {
    /// Creates a configuration with the given API key and defaults for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the base URL, overriding the production endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the interval between poll attempts.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the maximum number of poll attempts.
    ///
    /// Zero is permitted: `scan_url_and_wait` will then submit the URL but
    /// fail immediately without polling.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.poll_interval, Duration::from_millis(2000));
        assert_eq!(config.max_attempts, 10);
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("test-key")
            .with_base_url("https://vt.example.test/api/v3")
            .with_poll_interval(Duration::from_millis(50))
            .with_max_attempts(3);

        assert_eq!(config.base_url, "https://vt.example.test/api/v3");
        assert_eq!(config.poll_interval, Duration::from_millis(50));
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
    }
}
