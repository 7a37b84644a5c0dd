//! Backend API adapter
//!
//! Implements LeadApi over HTTP with reqwest.

pub mod client;
pub mod error;
mod wire;
