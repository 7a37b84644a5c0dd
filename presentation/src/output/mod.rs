//! Console output for the site

pub mod banner;
pub mod page;
