//! Testimonials currently shown on the page

use hvac_domain::Testimonial;
use std::sync::{Arc, PoisonError, RwLock};

/// Read-mostly list of testimonials, replaced wholesale on every
/// successful fetch.
#[derive(Debug, Clone, Default)]
pub struct TestimonialBoard {
    inner: Arc<RwLock<Vec<Testimonial>>>,
}

impl TestimonialBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, testimonials: Vec<Testimonial>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = testimonials;
    }

    pub fn list(&self) -> Vec<Testimonial> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}
