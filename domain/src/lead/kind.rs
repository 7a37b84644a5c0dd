//! Lead kind value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two lead-generation forms on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadKind {
    /// Quote request form
    Quote,
    /// Contact message form
    Contact,
}

impl LeadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadKind::Quote => "quote",
            LeadKind::Contact => "contact",
        }
    }

    /// Backend path segment the form is posted to
    pub fn endpoint(&self) -> &'static str {
        self.as_str()
    }

    /// Banner text shown after a successful submission
    pub fn success_message(&self) -> &'static str {
        match self {
            LeadKind::Quote => "Quote request submitted successfully!",
            LeadKind::Contact => "Message sent successfully!",
        }
    }

    /// Banner text used when the backend gives no reason (or never answered)
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            LeadKind::Quote => "Failed to submit quote request",
            LeadKind::Contact => "Failed to send message",
        }
    }
}

impl std::fmt::Display for LeadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quote" => Ok(LeadKind::Quote),
            "contact" => Ok(LeadKind::Contact),
            other => Err(DomainError::UnknownForm(other.to_string())),
        }
    }
}
