//! Shared submit status

use hvac_domain::SubmitStatus;
use std::sync::{Arc, Mutex, PoisonError};

/// The one [`SubmitStatus`] both forms write to.
///
/// Cloning yields another handle to the same value. Writes are
/// last-writer-wins and nothing ever clears the value on its own.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    inner: Arc<Mutex<SubmitStatus>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the status
    pub fn set(&self, status: SubmitStatus) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Current status
    pub fn current(&self) -> SubmitStatus {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvac_domain::StatusKind;

    #[test]
    fn test_clones_share_one_value() {
        let board = StatusBoard::new();
        let other = board.clone();

        board.set(SubmitStatus::success("Message sent successfully!"));
        assert_eq!(other.current().kind, StatusKind::Success);

        other.set(SubmitStatus::error("Invalid email"));
        assert_eq!(board.current(), SubmitStatus::error("Invalid email"));
    }
}
