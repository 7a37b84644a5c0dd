//! Interactive site session

pub mod command;
pub mod site_repl;

pub use command::{ParseError, ReplCommand};
pub use site_repl::SiteRepl;
