//! Static marketing content of the site

pub mod content;

pub use content::{SiteContent, SiteService};
