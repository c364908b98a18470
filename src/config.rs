//! Provider configuration resolved once at startup

use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing OpenWeather API key (set --api-key or OPENWEATHER_API_KEY)")]
    MissingApiKey,
    #[error("invalid provider base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Where and how to reach the weather provider
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let base_url = base_url.trim().trim_end_matches('/');
        let url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        })
    }
}

// Keep the credential out of logs and debug dumps.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
