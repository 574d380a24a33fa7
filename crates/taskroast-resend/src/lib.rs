//! Resend client for taskroast
//!
//! Thin wrapper over the Resend `/emails` endpoint, used to deliver roast
//! notifications as plain-text email. No retries; a failed send surfaces as a
//! typed [`ResendError`] and the caller decides what to do with it.

mod client;
mod error;

// Re-export main types
pub use client::{ResendClient, ResendConfig};
pub use error::ResendError;
