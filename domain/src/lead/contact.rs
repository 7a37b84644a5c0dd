//! Contact message form record

use super::form::{LeadForm, is_blank};
use super::kind::LeadKind;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field keys of [`ContactMessage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "phone" => Ok(ContactField::Phone),
            "message" => Ok(ContactField::Message),
            other => Err(DomainError::unknown_field("contact", other)),
        }
    }
}

/// A single-field update of a [`ContactMessage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEdit {
    pub field: ContactField,
    pub value: String,
}

impl ContactEdit {
    pub fn new(field: ContactField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Contact message form (Entity, session-scoped)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }
}

impl LeadForm for ContactMessage {
    type Field = ContactField;
    type Edit = ContactEdit;

    const KIND: LeadKind = LeadKind::Contact;

    fn apply(&mut self, edit: ContactEdit) {
        *self.slot(edit.field) = edit.value;
    }

    fn parse_edit(key: &str, value: &str) -> Result<ContactEdit, DomainError> {
        Ok(ContactEdit::new(key.parse()?, value))
    }

    fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| is_blank(self.value(*f)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_wire_shape() {
        let contact = ContactMessage {
            name: "B".to_string(),
            email: "b@c.com".to_string(),
            phone: "123".to_string(),
            message: "call me".to_string(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "B",
                "email": "b@c.com",
                "phone": "123",
                "message": "call me"
            })
        );
    }

    #[test]
    fn test_last_edit_wins_per_field() {
        let mut contact = ContactMessage::default();
        contact.apply(ContactEdit::new(ContactField::Name, "first"));
        contact.apply(ContactEdit::new(ContactField::Email, "e@x.com"));
        contact.apply(ContactEdit::new(ContactField::Name, "second"));

        assert_eq!(contact.name, "second");
        assert_eq!(contact.email, "e@x.com");
        assert!(contact.phone.is_empty());
        assert!(contact.message.is_empty());
    }

    #[test]
    fn test_parse_edit_rejects_service_type() {
        assert!(matches!(
            ContactMessage::parse_edit("service_type", "repair"),
            Err(DomainError::UnknownField { form: "contact", .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        let mut contact = ContactMessage::default();
        assert_eq!(contact.missing_fields().len(), 4);
        contact.apply(ContactEdit::new(ContactField::Name, "B"));
        contact.apply(ContactEdit::new(ContactField::Email, "b@c.com"));
        contact.apply(ContactEdit::new(ContactField::Phone, "1"));
        assert_eq!(contact.missing_fields(), vec![ContactField::Message]);
    }
}
