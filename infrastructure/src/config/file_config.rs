//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [api]
//! base_url = "https://continentalhvac.com/api"
//! timeout_seconds = 10
//!
//! [output]
//! color = false
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.base_url is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),
}

/// Raw backend API configuration from TOML (`[api]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL the `/testimonials`, `/quote` and `/contact` paths hang off
    pub base_url: String,
    /// Timeout in seconds for each request
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend API settings
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        match reqwest::Url::parse(&self.api.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ConfigValidationError::InvalidBaseUrl(
                self.api.base_url.clone(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://example.com/api"
timeout_seconds = 3

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://example.com/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(3));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
timeout_seconds = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_default_config() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.api.timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = FileConfig::default();
        config.api.base_url = "localhost:5000".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));

        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
