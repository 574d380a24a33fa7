//! Error types for the Gemini client.

use thiserror::Error;

/// Errors that can occur during a `generateContent` call.
///
/// The roast pipeline treats every variant as fatal for the current target
/// only; nothing here is silently swallowed.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Transport-level failure: connect, timeout, TLS, or body read/decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected our credentials.
    #[error("authentication rejected (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    /// Quota exhausted or rate-limit rejection.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response from the API.
    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A success response that carried no usable candidate text.
    #[error("model response contained no text")]
    EmptyResponse,
}
