//! Lead-generation forms
//!
//! - [`quote::QuoteRequest`] - quote request with a [`quote::ServiceType`]
//! - [`contact::ContactMessage`] - plain contact message
//! - [`form::LeadForm`] - shared shape both records implement
//! - [`kind::LeadKind`] - which form, plus its endpoint and banner texts

pub mod contact;
pub mod form;
pub mod kind;
pub mod quote;
