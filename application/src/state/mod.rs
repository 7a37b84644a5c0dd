//! Session state shared between the input surface and the use cases

pub mod form_holder;
pub mod status_board;
pub mod testimonial_board;
