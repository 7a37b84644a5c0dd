//! Submission status shown in the site's single status banner

use serde::{Deserialize, Serialize};

/// Outcome category of the most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Nothing submitted yet
    #[default]
    None,
    Success,
    Error,
}

/// Status of the last submission attempt (Value Object)
///
/// One value is shared by both forms; every attempt overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SubmitStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// A status is shown iff it carries a message
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden() {
        let status = SubmitStatus::default();
        assert_eq!(status.kind, StatusKind::None);
        assert!(!status.is_visible());
    }

    #[test]
    fn test_visibility_follows_message() {
        assert!(SubmitStatus::success("done").is_visible());
        assert!(SubmitStatus::error("nope").is_error());
        assert!(!SubmitStatus::error("").is_visible());
    }
}
