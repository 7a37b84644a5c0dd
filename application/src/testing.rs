//! Scriptable [`LeadApi`] used by the use-case tests

use crate::ports::lead_api::{ApiError, ErrorDetail, LeadApi};
use async_trait::async_trait;
use hvac_domain::{ContactMessage, QuoteRequest, Testimonial};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub(crate) struct MockLeadApi {
    testimonials: Mutex<Result<Vec<Testimonial>, ApiError>>,
    quote_result: Mutex<Result<(), ErrorDetail>>,
    contact_result: Mutex<Result<(), ErrorDetail>>,
    quote_gate: Option<Arc<Notify>>,
    contact_gate: Option<Arc<Notify>>,
    pub quote_calls: Mutex<Vec<QuoteRequest>>,
    pub contact_calls: Mutex<Vec<ContactMessage>>,
}

impl MockLeadApi {
    pub fn new() -> Self {
        Self {
            testimonials: Mutex::new(Ok(vec![])),
            quote_result: Mutex::new(Ok(())),
            contact_result: Mutex::new(Ok(())),
            quote_gate: None,
            contact_gate: None,
            quote_calls: Mutex::new(vec![]),
            contact_calls: Mutex::new(vec![]),
        }
    }

    pub fn with_testimonials(self, result: Result<Vec<Testimonial>, ApiError>) -> Self {
        *self.testimonials.lock().unwrap() = result;
        self
    }

    pub fn with_quote_result(self, result: Result<(), ErrorDetail>) -> Self {
        *self.quote_result.lock().unwrap() = result;
        self
    }

    pub fn with_contact_result(self, result: Result<(), ErrorDetail>) -> Self {
        *self.contact_result.lock().unwrap() = result;
        self
    }

    /// Quote submissions wait until the gate is notified
    pub fn with_quote_gate(mut self, gate: Arc<Notify>) -> Self {
        self.quote_gate = Some(gate);
        self
    }

    /// Contact submissions wait until the gate is notified
    pub fn with_contact_gate(mut self, gate: Arc<Notify>) -> Self {
        self.contact_gate = Some(gate);
        self
    }

    pub fn set_testimonials(&self, result: Result<Vec<Testimonial>, ApiError>) {
        *self.testimonials.lock().unwrap() = result;
    }
}

#[async_trait]
impl LeadApi for MockLeadApi {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.testimonials.lock().unwrap().clone()
    }

    async fn submit_quote(&self, quote: &QuoteRequest) -> Result<(), ErrorDetail> {
        self.quote_calls.lock().unwrap().push(quote.clone());
        if let Some(gate) = &self.quote_gate {
            gate.notified().await;
        }
        self.quote_result.lock().unwrap().clone()
    }

    async fn submit_contact(&self, contact: &ContactMessage) -> Result<(), ErrorDetail> {
        self.contact_calls.lock().unwrap().push(contact.clone());
        if let Some(gate) = &self.contact_gate {
            gate.notified().await;
        }
        self.contact_result.lock().unwrap().clone()
    }
}

pub(crate) fn testimonial(id: i64, rating: i32) -> Testimonial {
    Testimonial {
        id,
        name: format!("Customer {}", id),
        rating,
        comment: "Quick and friendly".to_string(),
    }
}
