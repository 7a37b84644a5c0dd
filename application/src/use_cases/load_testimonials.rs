//! Load Testimonials use case
//!
//! Fetches testimonials and publishes them to the page. Failures are
//! logged and swallowed so the rest of the page keeps working.

use crate::ports::lead_api::LeadApi;
use crate::state::testimonial_board::TestimonialBoard;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of one load attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many testimonials
    Refreshed(usize),
    /// The fetch failed; whatever was shown before is still shown
    KeptPrevious,
}

/// Use case for loading testimonials into a [`TestimonialBoard`]
pub struct LoadTestimonialsUseCase<A: LeadApi + 'static> {
    api: Arc<A>,
    board: TestimonialBoard,
}

impl<A: LeadApi + 'static> LoadTestimonialsUseCase<A> {
    pub fn new(api: Arc<A>, board: TestimonialBoard) -> Self {
        Self { api, board }
    }

    pub fn board(&self) -> &TestimonialBoard {
        &self.board
    }

    /// Fetch and replace the list wholesale. Never fails.
    pub async fn execute(&self) -> LoadOutcome {
        match self.api.fetch_testimonials().await {
            Ok(testimonials) => {
                debug!("Loaded {} testimonials", testimonials.len());
                let count = testimonials.len();
                self.board.replace(testimonials);
                LoadOutcome::Refreshed(count)
            }
            Err(e) => {
                warn!("Error fetching testimonials: {}", e);
                LoadOutcome::KeptPrevious
            }
        }
    }
}
