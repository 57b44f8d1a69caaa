//! Client configuration.

use serde::Deserialize;

use crate::error::ApiError;

/// Base URL of the public Stack Exchange 2.2 API.
pub const API_BASE_URL: &str = "https://api.stackexchange.com/2.2/";

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "STACKEXCHANGE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every generated URL. Always ends with `/`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }
        Ok(Self {
            base_url: format!("{}/", trimmed.trim_end_matches('/')),
        })
    }

    /// Defaults, with `STACKEXCHANGE_API_URL` applied when set.
    pub fn from_env() -> Result<Self, ApiError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new(&url),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(ApiError::Config(format!("{BASE_URL_ENV}: {e}"))),
        }
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        let parsed: ClientConfig =
            serde_json::from_str(raw).map_err(|e| ApiError::Config(e.to_string()))?;
        Self::new(&parsed.base_url)
    }
}
