//! Breed cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default cache lifetime in hours.
const fn default_ttl_hours() -> u64 {
    24
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a fetched breed list stays fresh, in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

impl CacheConfig {
    /// The configured lifetime as a [`Duration`].
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_hours.saturating_mul(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl_hours, 24);
        assert_eq!(config.ttl(), Duration::from_secs(24 * 3600));
    }

    #[test]
    fn ttl_follows_configured_hours() {
        let config = CacheConfig { ttl_hours: 1 };
        assert_eq!(config.ttl(), Duration::from_secs(3600));
    }
}
