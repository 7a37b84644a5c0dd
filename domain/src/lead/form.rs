//! Common shape of a lead-generation form record

use super::kind::LeadKind;
use crate::core::error::DomainError;
use std::fmt;

/// A form record that a visitor fills in field by field and then submits.
///
/// `Default` is the fixed record the form starts from and returns to after
/// a successful submission.
pub trait LeadForm: Clone + Default + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Field keys of the record
    type Field: Copy + Eq + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// A single-field update carrying an already-typed value
    type Edit: fmt::Debug + Send + 'static;

    /// Which form this record belongs to
    const KIND: LeadKind;

    /// Apply one edit. Touches exactly the edited field.
    fn apply(&mut self, edit: Self::Edit);

    /// Build an edit from a raw key/value pair as typed by the visitor
    fn parse_edit(key: &str, value: &str) -> Result<Self::Edit, DomainError>;

    /// Fields that are still empty (all fields are required)
    fn missing_fields(&self) -> Vec<Self::Field>;

    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
