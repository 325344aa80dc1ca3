//! Optional client configuration loaded from environment variables.
//!
//! Nothing in the client reads the environment on its own; callers that
//! keep credentials in the environment (or a `.env` file) call
//! [`Config::from_env`] and hand the result to
//! [`crate::RideWithGpsClient::from_config`].

use crate::pagination::{clamp_page_size, DEFAULT_PAGE_SIZE};
use crate::request::DEFAULT_BASE_URL;
use std::env;

/// Client configuration.
#[derive(Clone)]
pub struct Config {
    /// Ride with GPS API key (identifies the application)
    pub api_key: String,
    /// User auth token from a previous `authenticate` call
    pub auth_token: Option<String>,
    /// API base URL, overridable for testing
    pub base_url: String,
    /// Page size for collection endpoints
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `RWGPS_API_KEY` (required)
    /// - `RWGPS_AUTH_TOKEN`
    /// - `RWGPS_BASE_URL` (default: the public v1 API)
    /// - `RWGPS_PAGE_SIZE` (default: 200, clamped to 20..=200)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let page_size = match env::var("RWGPS_PAGE_SIZE") {
            Ok(raw) => clamp_page_size(raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "RWGPS_PAGE_SIZE",
                value: raw.clone(),
            })?),
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_key: env::var("RWGPS_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("RWGPS_API_KEY"))?,
            auth_token: env::var("RWGPS_AUTH_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            base_url: env::var("RWGPS_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            page_size,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("RWGPS_API_KEY", "test_key");
        env::set_var("RWGPS_AUTH_TOKEN", "test_token");
        env::set_var("RWGPS_BASE_URL", "http://localhost:9999/api/v1/");
        env::set_var("RWGPS_PAGE_SIZE", "500");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_key, "test_key");
        assert_eq!(config.auth_token.as_deref(), Some("test_token"));
        assert_eq!(config.base_url, "http://localhost:9999/api/v1");
        assert_eq!(config.page_size, 200);

        env::set_var("RWGPS_PAGE_SIZE", "lots");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid {
                name: "RWGPS_PAGE_SIZE",
                ..
            })
        ));

        env::remove_var("RWGPS_PAGE_SIZE");
        env::remove_var("RWGPS_BASE_URL");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config {
            api_key: "key-123".to_string(),
            auth_token: Some("token-456".to_string()),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("token-456"));
    }
}
