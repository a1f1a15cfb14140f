use serde::{Deserialize, Serialize};

/// Environment variable holding the remote store base URL.
pub const ENV_STORE_URL: &str = "FLIPSTOCK_STORE_URL";
/// Environment variable holding the remote store API key.
pub const ENV_STORE_API_KEY: &str = "FLIPSTOCK_STORE_API_KEY";

/// Connection settings for the REST gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `https://project.example.co`.
    pub base_url: String,
    /// API key, sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read configuration from the environment, falling back to local dev
    /// defaults with a logged warning.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_STORE_URL).unwrap_or_else(|_| {
            tracing::warn!("{ENV_STORE_URL} not set; using local dev default");
            "http://localhost:54321".to_string()
        });
        let api_key = std::env::var(ENV_STORE_API_KEY).unwrap_or_else(|_| {
            tracing::warn!("{ENV_STORE_API_KEY} not set; using insecure dev default");
            "dev-anon-key".to_string()
        });
        Self { base_url, api_key }
    }
}
