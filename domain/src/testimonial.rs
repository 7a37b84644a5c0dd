//! Customer testimonial entity

use serde::{Deserialize, Serialize};

/// Highest rating a testimonial can carry
pub const MAX_RATING: i32 = 5;

/// A customer testimonial as served by the backend (read-only)
///
/// Extra backend columns such as `created_at` or `approved` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub rating: i32,
    pub comment: String,
}

impl Testimonial {
    /// Number of rating indicators to draw, bounded to `0..=MAX_RATING`
    pub fn star_count(&self) -> usize {
        self.rating.clamp(0, MAX_RATING) as usize
    }
}
