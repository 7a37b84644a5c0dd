//! Quote request form record

use super::form::{LeadForm, is_blank};
use super::kind::LeadKind;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of work a quote is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Installation,
    Repair,
    Maintenance,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Installation,
        ServiceType::Repair,
        ServiceType::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Installation => "installation",
            ServiceType::Repair => "repair",
            ServiceType::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "installation" => Ok(ServiceType::Installation),
            "repair" => Ok(ServiceType::Repair),
            "maintenance" => Ok(ServiceType::Maintenance),
            other => Err(DomainError::InvalidServiceType(other.to_string())),
        }
    }
}

/// Field keys of [`QuoteRequest`], named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Message,
    ServiceType,
}

impl QuoteField {
    pub const ALL: [QuoteField; 5] = [
        QuoteField::Name,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::Message,
        QuoteField::ServiceType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteField::Name => "name",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::Message => "message",
            QuoteField::ServiceType => "service_type",
        }
    }
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(QuoteField::Name),
            "email" => Ok(QuoteField::Email),
            "phone" => Ok(QuoteField::Phone),
            "message" => Ok(QuoteField::Message),
            "service_type" | "service" => Ok(QuoteField::ServiceType),
            other => Err(DomainError::unknown_field("quote", other)),
        }
    }
}

/// A single-field update of a [`QuoteRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteEdit {
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
    ServiceType(ServiceType),
}

impl QuoteEdit {
    pub fn field(&self) -> QuoteField {
        match self {
            QuoteEdit::Name(_) => QuoteField::Name,
            QuoteEdit::Email(_) => QuoteField::Email,
            QuoteEdit::Phone(_) => QuoteField::Phone,
            QuoteEdit::Message(_) => QuoteField::Message,
            QuoteEdit::ServiceType(_) => QuoteField::ServiceType,
        }
    }
}

/// Quote request form (Entity, session-scoped)
///
/// Serializes to the body the backend expects on `POST /quote`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service_type: ServiceType,
}

impl QuoteRequest {
    /// Current value of a field, as the visitor would see it
    pub fn value(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Message => &self.message,
            QuoteField::ServiceType => self.service_type.as_str(),
        }
    }
}

impl LeadForm for QuoteRequest {
    type Field = QuoteField;
    type Edit = QuoteEdit;

    const KIND: LeadKind = LeadKind::Quote;

    fn apply(&mut self, edit: QuoteEdit) {
        match edit {
            QuoteEdit::Name(v) => self.name = v,
            QuoteEdit::Email(v) => self.email = v,
            QuoteEdit::Phone(v) => self.phone = v,
            QuoteEdit::Message(v) => self.message = v,
            QuoteEdit::ServiceType(v) => self.service_type = v,
        }
    }

    fn parse_edit(key: &str, value: &str) -> Result<QuoteEdit, DomainError> {
        let value = value.to_string();
        Ok(match key.parse::<QuoteField>()? {
            QuoteField::Name => QuoteEdit::Name(value),
            QuoteField::Email => QuoteEdit::Email(value),
            QuoteField::Phone => QuoteEdit::Phone(value),
            QuoteField::Message => QuoteEdit::Message(value),
            QuoteField::ServiceType => QuoteEdit::ServiceType(value.parse()?),
        })
    }

    fn missing_fields(&self) -> Vec<QuoteField> {
        // service_type always holds one of the fixed values
        QuoteField::ALL
            .into_iter()
            .filter(|f| *f != QuoteField::ServiceType && is_blank(self.value(*f)))
            .collect()
    }
}
