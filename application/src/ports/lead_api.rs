//! Lead API port
//!
//! Defines the interface for talking to the site backend: reading
//! testimonials and posting the two lead forms.

use async_trait::async_trait;
use hvac_domain::{ContactMessage, LeadKind, QuoteRequest, Testimonial};
use thiserror::Error;

/// Errors that can occur while reading from the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Normalized failure of a form submission
///
/// Produced either from a transport failure or from a backend rejection.
/// `message` is what the status banner shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The request never got a response
    pub fn transport(kind: LeadKind) -> Self {
        Self::new(kind.failure_fallback())
    }

    /// The backend answered with a failure status. Its `error` reason wins
    /// when present and non-empty.
    pub fn rejected(kind: LeadKind, reason: Option<String>) -> Self {
        match reason {
            Some(reason) if !reason.trim().is_empty() => Self::new(reason),
            _ => Self::new(kind.failure_fallback()),
        }
    }
}

/// Gateway to the site backend
///
/// This port defines how the application layer reaches the backend.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LeadApi: Send + Sync {
    /// Fetch the published testimonials
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, ApiError>;

    /// Post a quote request
    async fn submit_quote(&self, quote: &QuoteRequest) -> Result<(), ErrorDetail>;

    /// Post a contact message
    async fn submit_contact(&self, contact: &ContactMessage) -> Result<(), ErrorDetail>;
}
