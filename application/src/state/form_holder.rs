//! Form state holder
//!
//! Holds the live values of one lead form while the visitor types.

use hvac_domain::{DomainError, LeadForm};
use std::sync::{Mutex, PoisonError};

/// Mutable record behind one form (quote or contact).
///
/// Shared via `Arc<FormHolder<F>>` between the input surface (writer of
/// single fields) and the form's submission workflow (snapshot + reset).
/// No validation happens here.
#[derive(Debug, Default)]
pub struct FormHolder<F: LeadForm> {
    record: Mutex<F>,
}

impl<F: LeadForm> FormHolder<F> {
    /// Create a holder with the default record
    pub fn new() -> Self {
        Self {
            record: Mutex::new(F::default()),
        }
    }

    /// Snapshot of the current field values
    pub fn get(&self) -> F {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Update exactly one field; all others stay as they are
    pub fn set_field(&self, edit: F::Edit) {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(edit);
    }

    /// Parse a raw key/value pair and apply it
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let edit = F::parse_edit(key, value)?;
        self.set_field(edit);
        Ok(())
    }

    /// Restore the fixed default record
    pub fn reset(&self) {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = F::default();
    }
}
