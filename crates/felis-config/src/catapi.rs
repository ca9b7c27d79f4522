//! Breed API client configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.thecatapi.com/v1".to_string()
}

/// Default per-request timeout in seconds.
const fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatApiConfig {
    /// Breed API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `x-api-key` header. Empty means anonymous
    /// access, which the upstream allows at reduced rate limits.
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CatApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl CatApiConfig {
    /// Whether authenticated requests are enabled.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
