//! Configuration file loading for hvac-site
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HVAC_API_BASE_URL` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./hvac.toml` or `./.hvac.toml`
//! 4. Global: `<config_dir>/hvac-site/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS, FileApiConfig,
    FileConfig, FileOutputConfig,
};
pub use loader::{BASE_URL_ENV, ConfigLoader};
