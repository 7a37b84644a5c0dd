//! Domain layer for hvac-site
//!
//! This crate contains the entities and value objects of the Continental HVAC
//! site. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Lead forms
//!
//! - **Quote request**: contact details plus the kind of service wanted
//! - **Contact message**: contact details plus a free-form message
//!
//! Both are plain records edited field by field and reset to their
//! `Default` after a successful submission.
//!
//! ## Submit status
//!
//! A single [`SubmitStatus`] is shared by both forms; the latest
//! submission attempt overwrites it.

pub mod core;
pub mod lead;
pub mod site;
pub mod status;
pub mod testimonial;

// Re-export commonly used types
pub use core::error::DomainError;
pub use lead::{
    contact::{ContactEdit, ContactField, ContactMessage},
    form::LeadForm,
    kind::LeadKind,
    quote::{QuoteEdit, QuoteField, QuoteRequest, ServiceType},
};
pub use site::{SiteContent, SiteService};
pub use status::{StatusKind, SubmitStatus};
pub use testimonial::{MAX_RATING, Testimonial};
