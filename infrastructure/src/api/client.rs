//! HTTP implementation of the [`LeadApi`] port

use super::error::HttpApiError;
use super::wire::ErrorBody;
use async_trait::async_trait;
use hvac_application::ports::lead_api::{ApiError, ErrorDetail, LeadApi};
use hvac_domain::{ContactMessage, LeadKind, QuoteRequest, Testimonial};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Talks JSON over HTTP to the site backend
pub struct HttpLeadApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLeadApi {
    /// Create a client for the given base URL (e.g. `http://localhost:5000/api`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpApiError> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| HttpApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hvac-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!("HttpLeadApi initialized for {}", base_url);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// POST a form and translate any failure into an [`ErrorDetail`]
    async fn post_lead<T: Serialize + Sync>(
        &self,
        kind: LeadKind,
        body: &T,
    ) -> Result<(), ErrorDetail> {
        let url = self.endpoint(kind.endpoint());
        debug!("POST {}", url);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("POST {} failed: {}", url, e);
                return Err(ErrorDetail::transport(kind));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let reason = match response.bytes().await {
            Ok(body) => ErrorBody::reason(&body),
            Err(e) => {
                debug!("Could not read {} error body: {}", kind, e);
                None
            }
        };
        warn!(
            "POST {} rejected with {}: {}",
            url,
            status.as_u16(),
            reason.as_deref().unwrap_or("no reason given")
        );

        Err(ErrorDetail::rejected(kind, reason))
    }
}

#[async_trait]
impl LeadApi for HttpLeadApi {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        let url = self.endpoint("testimonials");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Testimonial>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn submit_quote(&self, quote: &QuoteRequest) -> Result<(), ErrorDetail> {
        self.post_lead(LeadKind::Quote, quote).await
    }

    async fn submit_contact(&self, contact: &ContactMessage) -> Result<(), ErrorDetail> {
        self.post_lead(LeadKind::Contact, contact).await
    }
}
