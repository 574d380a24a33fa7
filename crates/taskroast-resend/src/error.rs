//! Error types for the Resend client.

use thiserror::Error;

/// Errors that can occur when submitting an email for delivery.
///
/// Deliberately a different type from the model client's error so the
/// pipeline can tell a failed generation from a failed dispatch.
#[derive(Debug, Error)]
pub enum ResendError {
    /// Transport-level failure: connect, timeout, TLS, or body read/decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API refused the send (bad key, invalid sender, validation error).
    #[error("Resend API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}
