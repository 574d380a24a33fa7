//! HTTP client for the Resend `/emails` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResendError;

/// Default Resend API endpoint.
const RESEND_API_URL: &str = "https://api.resend.com";

/// Bound on a single send call.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Resend client.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key sent as a bearer token.
    pub api_key: String,

    /// Sender address for every email this client submits.
    pub from: String,

    /// Base URL override; tests point this at a stub server.
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ResendConfig {
    /// Configuration with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            from: from.into(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Request body for `/emails`.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Success body for `/emails`.
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Error body the API returns on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the Resend transactional-email API.
pub struct ResendClient {
    inner: reqwest::Client,
    config: ResendConfig,
}

impl ResendClient {
    /// Create a new client. Fails only if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: ResendConfig) -> Result<Self, ResendError> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { inner, config })
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(RESEND_API_URL)
            .trim_end_matches('/')
    }

    /// Submit a plain-text email for delivery.
    ///
    /// Returns the provider's email id as the delivery acknowledgment.
    pub async fn send_text(
        &self,
        to: &str,
        subject: &str,
        text: &str,
    ) -> Result<String, ResendError> {
        let url = format!("{}/emails", self.base_url());
        let body = SendEmailRequest {
            from: &self.config.from,
            to,
            subject,
            text,
        };

        debug!(to = %to, subject = %subject, "submitting email");

        let response = self
            .inner
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(ResendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SendEmailResponse = response.json().await?;
        Ok(parsed.id)
    }
}
