//! Client configuration.

use std::env;
use std::time::Duration;

use posturekit_core::constants::{API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

/// Where the backend lives and how long requests may take.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Backend origin including the versioned API root.
    pub base_url: String,
    /// Fixed timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConnectConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads the backend origin from the environment, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ConnectConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_explicit_base_url() {
        let config = ConnectConfig::new("https://api.posturekit.app/api/v1");
        assert_eq!(config.base_url, "https://api.posturekit.app/api/v1");
    }
}
