//! Random cat image configuration.

use serde::{Deserialize, Serialize};

fn default_random_base_url() -> String {
    "https://cataas.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfig {
    /// Base URL for the random cat image host.
    #[serde(default = "default_random_base_url")]
    pub random_base_url: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            random_base_url: default_random_base_url(),
        }
    }
}
