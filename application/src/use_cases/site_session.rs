//! Site session
//!
//! Wires the two form workflows, the testimonial loader and the shared
//! status into one visitor session. Network work is spawned onto the
//! runtime so the caller keeps handling input while requests are out.

use crate::ports::lead_api::LeadApi;
use crate::state::form_holder::FormHolder;
use crate::state::status_board::StatusBoard;
use crate::state::testimonial_board::TestimonialBoard;
use crate::use_cases::load_testimonials::{LoadOutcome, LoadTestimonialsUseCase};
use crate::use_cases::submit_form::{SubmitFormError, SubmitFormUseCase, SubmitOutcome};
use hvac_domain::{
    ContactMessage, DomainError, LeadForm, LeadKind, QuoteRequest, SubmitStatus, Testimonial,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Handle to a spawned submission
pub type SubmitHandle = JoinHandle<Result<SubmitOutcome, SubmitFormError>>;

/// One visitor's view of the site
pub struct SiteSession<A: LeadApi + 'static> {
    quote: Arc<SubmitFormUseCase<QuoteRequest, A>>,
    contact: Arc<SubmitFormUseCase<ContactMessage, A>>,
    testimonials: Arc<LoadTestimonialsUseCase<A>>,
    status: StatusBoard,
}

impl<A: LeadApi + 'static> SiteSession<A> {
    pub fn new(api: Arc<A>) -> Self {
        let status = StatusBoard::new();
        Self {
            quote: Arc::new(SubmitFormUseCase::new(
                Arc::clone(&api),
                Arc::new(FormHolder::new()),
                status.clone(),
            )),
            contact: Arc::new(SubmitFormUseCase::new(
                Arc::clone(&api),
                Arc::new(FormHolder::new()),
                status.clone(),
            )),
            testimonials: Arc::new(LoadTestimonialsUseCase::new(api, TestimonialBoard::new())),
            status,
        }
    }

    /// Page load: start fetching testimonials in the background
    pub fn load(&self) -> JoinHandle<LoadOutcome> {
        info!("Loading testimonials");
        let testimonials = Arc::clone(&self.testimonials);
        tokio::spawn(async move { testimonials.execute().await })
    }

    pub fn quote_form(&self) -> &Arc<FormHolder<QuoteRequest>> {
        self.quote.form()
    }

    pub fn contact_form(&self) -> &Arc<FormHolder<ContactMessage>> {
        self.contact.form()
    }

    pub fn quote(&self) -> &Arc<SubmitFormUseCase<QuoteRequest, A>> {
        &self.quote
    }

    pub fn contact(&self) -> &Arc<SubmitFormUseCase<ContactMessage, A>> {
        &self.contact
    }

    /// Current shared status
    pub fn status(&self) -> SubmitStatus {
        self.status.current()
    }

    /// Testimonials currently on the page
    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.board().list()
    }

    /// Set one field of the given form from raw input
    pub fn edit(&self, kind: LeadKind, key: &str, value: &str) -> Result<(), DomainError> {
        match kind {
            LeadKind::Quote => self.quote_form().set_raw(key, value),
            LeadKind::Contact => self.contact_form().set_raw(key, value),
        }
    }

    pub fn reset(&self, kind: LeadKind) {
        match kind {
            LeadKind::Quote => self.quote_form().reset(),
            LeadKind::Contact => self.contact_form().reset(),
        }
    }

    /// Names of the still-empty required fields of a form
    pub fn missing_fields(&self, kind: LeadKind) -> Vec<String> {
        match kind {
            LeadKind::Quote => names(self.quote_form().get().missing_fields()),
            LeadKind::Contact => names(self.contact_form().get().missing_fields()),
        }
    }

    pub fn is_submitting(&self, kind: LeadKind) -> bool {
        match kind {
            LeadKind::Quote => self.quote.is_submitting(),
            LeadKind::Contact => self.contact.is_submitting(),
        }
    }

    /// Submit a form in the background
    pub fn spawn_submit(&self, kind: LeadKind) -> SubmitHandle {
        match kind {
            LeadKind::Quote => {
                let quote = Arc::clone(&self.quote);
                tokio::spawn(async move { quote.execute().await })
            }
            LeadKind::Contact => {
                let contact = Arc::clone(&self.contact);
                tokio::spawn(async move { contact.execute().await })
            }
        }
    }

    /// Submit a form and wait for the outcome
    pub async fn submit(&self, kind: LeadKind) -> Result<SubmitOutcome, SubmitFormError> {
        match kind {
            LeadKind::Quote => self.quote.execute().await,
            LeadKind::Contact => self.contact.execute().await,
        }
    }
}

fn names<T: ToString>(fields: Vec<T>) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::lead_api::{ApiError, ErrorDetail};
    use crate::testing::{MockLeadApi, testimonial};
    use hvac_domain::StatusKind;
    use tokio::sync::Notify;

    fn fill(session: &SiteSession<MockLeadApi>) {
        for kind in [LeadKind::Quote, LeadKind::Contact] {
            session.edit(kind, "name", "A").unwrap();
            session.edit(kind, "email", "a@b.com").unwrap();
            session.edit(kind, "phone", "555").unwrap();
            session.edit(kind, "message", "hi").unwrap();
        }
    }

    #[tokio::test]
    async fn test_load_failure_does_not_touch_status() {
        let api = MockLeadApi::new().with_testimonials(Err(ApiError::Decode("bad".to_string())));
        let session = SiteSession::new(Arc::new(api));

        let outcome = session.load().await.unwrap();

        assert_eq!(outcome, LoadOutcome::KeptPrevious);
        assert!(session.testimonials().is_empty());
        assert_eq!(session.status(), SubmitStatus::default());
    }

    #[tokio::test]
    async fn test_load_publishes_testimonials() {
        let api = MockLeadApi::new().with_testimonials(Ok(vec![testimonial(1, 5)]));
        let session = SiteSession::new(Arc::new(api));

        session.load().await.unwrap();

        assert_eq!(session.testimonials().len(), 1);
    }

    #[tokio::test]
    async fn test_forms_are_independent() {
        let api = MockLeadApi::new()
            .with_contact_result(Err(ErrorDetail::new("Invalid email")));
        let session = SiteSession::new(Arc::new(api));
        fill(&session);
        session.edit(LeadKind::Quote, "service_type", "repair").unwrap();

        session.submit(LeadKind::Contact).await.unwrap();

        // The quote form is untouched by the contact failure
        assert_eq!(session.quote_form().get().name, "A");
        assert_eq!(session.contact_form().get().name, "A");
        assert_eq!(session.status(), SubmitStatus::error("Invalid email"));

        session.submit(LeadKind::Quote).await.unwrap();

        assert_eq!(session.quote_form().get(), QuoteRequest::default());
        assert_eq!(session.contact_form().get().email, "a@b.com");
        assert_eq!(
            session.status(),
            SubmitStatus::success("Quote request submitted successfully!")
        );
    }

    #[tokio::test]
    async fn test_overlapping_submissions_last_resolved_wins() {
        let quote_gate = Arc::new(Notify::new());
        let contact_gate = Arc::new(Notify::new());
        let api = MockLeadApi::new()
            .with_quote_gate(Arc::clone(&quote_gate))
            .with_contact_gate(Arc::clone(&contact_gate))
            .with_contact_result(Err(ErrorDetail::new("Invalid email")));
        let session = SiteSession::new(Arc::new(api));
        fill(&session);

        // Quote submitted first, contact second
        let quote = session.spawn_submit(LeadKind::Quote);
        let contact = session.spawn_submit(LeadKind::Contact);

        // Contact resolves first, quote last
        contact_gate.notify_one();
        contact.await.unwrap().unwrap();
        assert_eq!(session.status().kind, StatusKind::Error);

        quote_gate.notify_one();
        quote.await.unwrap().unwrap();
        assert_eq!(
            session.status(),
            SubmitStatus::success("Quote request submitted successfully!")
        );
    }

    #[tokio::test]
    async fn test_overlapping_submissions_later_submit_resolving_last_wins() {
        let quote_gate = Arc::new(Notify::new());
        let contact_gate = Arc::new(Notify::new());
        let api = MockLeadApi::new()
            .with_quote_gate(Arc::clone(&quote_gate))
            .with_contact_gate(Arc::clone(&contact_gate));
        let session = SiteSession::new(Arc::new(api));
        fill(&session);

        let quote = session.spawn_submit(LeadKind::Quote);
        let contact = session.spawn_submit(LeadKind::Contact);

        quote_gate.notify_one();
        quote.await.unwrap().unwrap();
        contact_gate.notify_one();
        contact.await.unwrap().unwrap();

        assert_eq!(
            session.status(),
            SubmitStatus::success("Message sent successfully!")
        );
    }

    #[test]
    fn test_missing_fields_by_name() {
        let session = SiteSession::new(Arc::new(MockLeadApi::new()));
        session.edit(LeadKind::Contact, "name", "A").unwrap();
        assert_eq!(
            session.missing_fields(LeadKind::Contact),
            vec!["email", "phone", "message"]
        );
        assert!(session.edit(LeadKind::Contact, "service_type", "repair").is_err());
    }
}
