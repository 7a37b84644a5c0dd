//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_testimonials;
pub mod site_session;
pub mod submit_form;
