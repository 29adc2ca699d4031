//! Outbound delivery of contact form submissions.
//!
//! The [`FormRelay`] trait is the seam between the submission state machine
//! and the network. [`HttpFormRelay`] posts the payload form-encoded to a
//! third-party form service (Formspree by default) and judges the outcome by
//! HTTP status alone. One attempt per call: no retries, no backoff.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::RelayError;
use crate::form::ContactPayload;

/// Default third-party endpoint for the contact form.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/ajilsoils-contact";

/// Default whole-request timeout for the outbound POST.
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(15);

/// Delivers a contact payload somewhere.
#[async_trait::async_trait]
pub trait FormRelay: Send + Sync + 'static {
    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Rejected`] on a non-2xx status, and
    /// [`RelayError::Timeout`] or [`RelayError::Network`] when the request
    /// could not be completed.
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

/// Settings for [`HttpFormRelay`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// URL the form is posted to.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FORM_ENDPOINT.to_owned(),
            timeout: DEFAULT_RELAY_TIMEOUT,
        }
    }
}

/// Posts submissions to an HTTP form service.
#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpFormRelay {
    /// Build a relay with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the endpoint is empty, or
    /// `RelayError::Network` if the HTTP client cannot be built.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let endpoint = config.endpoint.trim().to_owned();
        if endpoint.is_empty() {
            return Err(RelayError::Config("form endpoint must not be empty".to_owned()));
        }

        let timeout = if config.timeout.is_zero() {
            DEFAULT_RELAY_TIMEOUT
        } else {
            config.timeout
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ajil-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RelayError::Network)?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl FormRelay for HttpFormRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout
                } else {
                    RelayError::Network(e)
                }
            })?;

        let status = resp.status();
        debug!(status = status.as_u16(), "form endpoint responded");

        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
