//! Repository client configuration.

use std::time::Duration;

/// Default repository location.
pub const DEFAULT_BASE_URL: &str = "https://webpbn.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for connecting to the puzzle repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the repository, without trailing slash
    pub base_url: String,

    /// Timeout applied to every request (None = no timeout)
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repository base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the request timeout.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Absolute URL of a repository endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("nonofetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://webpbn.com");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("nonofetch/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "test");
        assert!(ClientConfig::new().without_timeout().timeout.is_none());
    }

    #[test]
    fn test_endpoint() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080");
        assert_eq!(config.endpoint("random.cgi"), "http://localhost:8080/random.cgi");
        assert_eq!(config.endpoint("/XMLpuz.cgi"), "http://localhost:8080/XMLpuz.cgi");
    }
}
