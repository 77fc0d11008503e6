//! Client configuration

use core_config::{env_or_default, ConfigError, FromEnv};

/// Where `products-api` listens when started without configuration
pub const DEFAULT_API_URL: &str = "http://localhost:8080/bp";
pub const DEFAULT_AUTHOR_ID: &str = "123";

/// Where the catalog API lives and who the client claims to be
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL including the API base path, without a trailing slash
    pub api_url: String,
    /// Sent as the `authorId` header on every request
    pub author_id: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            author_id: author_id.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_AUTHOR_ID)
    }
}

impl FromEnv for ClientConfig {
    /// Reads from environment variables with defaults:
    /// - PRODUCTS_API_URL: http://localhost:8080/bp
    /// - AUTHOR_ID: 123
    fn from_env() -> Result<Self, ConfigError> {
        let api_url = env_or_default("PRODUCTS_API_URL", DEFAULT_API_URL);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::ParseError {
                key: "PRODUCTS_API_URL".to_string(),
                details: format!("expected an http(s) URL, got '{}'", api_url),
            });
        }

        Ok(Self::new(
            api_url,
            env_or_default("AUTHOR_ID", DEFAULT_AUTHOR_ID),
        ))
    }
}
