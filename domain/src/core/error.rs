//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown {form} field: {field}")]
    UnknownField { form: &'static str, field: String },

    #[error("Invalid service type: {0} (expected installation, repair or maintenance)")]
    InvalidServiceType(String),

    #[error("Unknown form: {0} (expected quote or contact)")]
    UnknownForm(String),
}

impl DomainError {
    pub(crate) fn unknown_field(form: &'static str, field: impl Into<String>) -> Self {
        DomainError::UnknownField {
            form,
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let error = DomainError::unknown_field("quote", "budget");
        assert_eq!(error.to_string(), "Unknown quote field: budget");
    }

    #[test]
    fn test_invalid_service_type_display() {
        let error = DomainError::InvalidServiceType("plumbing".to_string());
        assert!(error.to_string().starts_with("Invalid service type: plumbing"));
    }
}
