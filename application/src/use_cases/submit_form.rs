//! Submit Form use case
//!
//! Runs one submission of a lead form: snapshot the form, post it,
//! write the shared status, and reset the form on success.

use crate::ports::lead_api::{ErrorDetail, LeadApi};
use crate::state::form_holder::FormHolder;
use crate::state::status_board::StatusBoard;
use futures::future::BoxFuture;
use hvac_domain::{ContactMessage, LeadForm, LeadKind, QuoteRequest, SubmitStatus};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that keep a submission from starting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitFormError {
    #[error("A {0} submission is already in progress")]
    AlreadySubmitting(LeadKind),
}

/// How a submission attempt ended. The shared status has already been
/// updated by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend accepted the lead; the form was reset
    Accepted,
    /// Submission failed; the form keeps its values
    Rejected(ErrorDetail),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Routes a form record to its endpoint on the [`LeadApi`]
pub trait SubmitLead: LeadForm {
    fn submit_to<'a>(
        api: &'a dyn LeadApi,
        form: &'a Self,
    ) -> BoxFuture<'a, Result<(), ErrorDetail>>;
}

impl SubmitLead for QuoteRequest {
    fn submit_to<'a>(
        api: &'a dyn LeadApi,
        form: &'a Self,
    ) -> BoxFuture<'a, Result<(), ErrorDetail>> {
        Box::pin(async move { api.submit_quote(form).await })
    }
}

impl SubmitLead for ContactMessage {
    fn submit_to<'a>(
        api: &'a dyn LeadApi,
        form: &'a Self,
    ) -> BoxFuture<'a, Result<(), ErrorDetail>> {
        Box::pin(async move { api.submit_contact(form).await })
    }
}

/// Clears the in-flight flag when the attempt ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case for submitting one lead form
///
/// Holds no state besides the in-flight flag, so every call is a fresh
/// attempt with whatever the form holds at that moment. There is no
/// cancellation: once started, the result is always applied.
pub struct SubmitFormUseCase<F: SubmitLead, A: LeadApi + 'static> {
    api: Arc<A>,
    form: Arc<FormHolder<F>>,
    status: StatusBoard,
    in_flight: AtomicBool,
}

impl<F: SubmitLead, A: LeadApi + 'static> SubmitFormUseCase<F, A> {
    pub fn new(api: Arc<A>, form: Arc<FormHolder<F>>, status: StatusBoard) -> Self {
        Self {
            api,
            form,
            status,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The form this workflow submits
    pub fn form(&self) -> &Arc<FormHolder<F>> {
        &self.form
    }

    /// Whether a submission is currently awaiting the backend
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the current form contents
    ///
    /// Backend and transport failures never surface as `Err`; they are
    /// folded into the shared status and returned as
    /// [`SubmitOutcome::Rejected`]. `Err` only means the attempt was
    /// refused because another one is still in flight.
    pub async fn execute(&self) -> Result<SubmitOutcome, SubmitFormError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Ignoring {} submit while one is in flight", F::KIND);
            return Err(SubmitFormError::AlreadySubmitting(F::KIND));
        }
        let _in_flight = InFlight(&self.in_flight);

        let record = self.form.get();
        info!("Submitting {} form", F::KIND);

        match F::submit_to(self.api.as_ref(), &record).await {
            Ok(()) => {
                info!("{} form accepted", F::KIND);
                self.status
                    .set(SubmitStatus::success(F::KIND.success_message()));
                self.form.reset();
                Ok(SubmitOutcome::Accepted)
            }
            Err(detail) => {
                warn!("{} form rejected: {}", F::KIND, detail);
                self.status.set(SubmitStatus::error(detail.message.clone()));
                Ok(SubmitOutcome::Rejected(detail))
            }
        }
    }
}
