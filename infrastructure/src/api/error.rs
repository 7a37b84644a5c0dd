//! Error types for the HTTP adapter

use thiserror::Error;

/// Errors that can occur while setting up the HTTP client
#[derive(Error, Debug)]
pub enum HttpApiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
