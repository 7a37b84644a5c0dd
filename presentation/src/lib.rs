//! Presentation layer for hvac-site
//!
//! This crate contains CLI definitions, the page and status banner
//! renderers, and the interactive site session.

pub mod cli;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ContactArgs, QuoteArgs};
pub use output::{banner::StatusBanner, page::PageRenderer};
pub use repl::{ReplCommand, SiteRepl};
