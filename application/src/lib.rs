//! Application layer for hvac-site
//!
//! This crate contains use cases, port definitions, and the session state
//! shared between the input surface and the use cases.
//! It depends only on the domain layer.

pub mod ports;
pub mod state;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use ports::lead_api::{ApiError, ErrorDetail, LeadApi};
pub use state::{
    form_holder::FormHolder, status_board::StatusBoard, testimonial_board::TestimonialBoard,
};
pub use use_cases::load_testimonials::{LoadOutcome, LoadTestimonialsUseCase};
pub use use_cases::site_session::{SiteSession, SubmitHandle};
pub use use_cases::submit_form::{SubmitFormError, SubmitFormUseCase, SubmitLead, SubmitOutcome};
