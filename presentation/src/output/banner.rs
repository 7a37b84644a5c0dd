//! Status banner: the single success/error line shown near the forms

use colored::Colorize;
use hvac_domain::{StatusKind, SubmitStatus};

/// Read-only view over the shared [`SubmitStatus`]
pub struct StatusBanner;

impl StatusBanner {
    /// The banner shows iff there is a message
    pub fn is_visible(status: &SubmitStatus) -> bool {
        status.is_visible()
    }

    /// Render the banner, or `None` when it is hidden
    pub fn render(status: &SubmitStatus) -> Option<String> {
        if !Self::is_visible(status) {
            return None;
        }

        let line = match status.kind {
            StatusKind::Success => {
                format!("{} {}", "v".green().bold(), status.message.green())
            }
            StatusKind::Error => format!("{} {}", "x".red().bold(), status.message.red()),
            StatusKind::None => status.message.clone(),
        };
        Some(line)
    }
}
