//! Parsing of interactive commands

use hvac_domain::{DomainError, LeadKind};
use thiserror::Error;

/// A command typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `quote <field> <value>` / `contact <field> <value>`
    Set {
        kind: LeadKind,
        field: String,
        value: String,
    },
    /// `show [quote|contact]`
    Show(Option<LeadKind>),
    /// `submit quote|contact`
    Submit(LeadKind),
    /// `reset quote|contact`
    Reset(LeadKind),
    Status,
    Testimonials,
    Refresh,
    Page,
    Help,
    Quit,
}

/// Why a line could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (type 'help' for commands)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ReplCommand {
    /// Parse one non-empty input line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = split_word(line);

        match word.to_lowercase().as_str() {
            "quote" | "contact" => {
                let kind: LeadKind = word.parse()?;
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(ParseError::Usage("quote|contact <field> <value>"));
                }
                Ok(ReplCommand::Set {
                    kind,
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "show" => {
                if rest.is_empty() {
                    Ok(ReplCommand::Show(None))
                } else {
                    Ok(ReplCommand::Show(Some(rest.parse()?)))
                }
            }
            "submit" => Ok(ReplCommand::Submit(required_kind(rest, "submit quote|contact")?)),
            "reset" => Ok(ReplCommand::Reset(required_kind(rest, "reset quote|contact")?)),
            "status" => Ok(ReplCommand::Status),
            "testimonials" => Ok(ReplCommand::Testimonials),
            "refresh" => Ok(ReplCommand::Refresh),
            "page" => Ok(ReplCommand::Page),
            "help" | "h" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }
}

fn required_kind(rest: &str, usage: &'static str) -> Result<LeadKind, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(rest.parse()?)
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s, ""),
    }
}
