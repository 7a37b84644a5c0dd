//! Infrastructure layer for hvac-site
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod api;
pub mod config;

// Re-export commonly used types
pub use api::{client::HttpLeadApi, error::HttpApiError};
pub use config::{
    BASE_URL_ENV, ConfigLoader, ConfigValidationError, DEFAULT_API_BASE_URL, FileApiConfig,
    FileConfig, FileOutputConfig,
};
