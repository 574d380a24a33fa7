//! Gemini client for taskroast
//!
//! This crate wraps the Gemini `generateContent` endpoint for roast
//! generation: the persona rides as a system-style instruction, the material
//! as the user-turn content, and sampling is fixed so every caller gets the
//! same generation behavior.
//!
//! # Example
//!
//! ```rust,no_run
//! use taskroast_gemini::{GeminiClient, GeminiConfig};
//!
//! async fn roast() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new(GeminiConfig::new("api-key"))?;
//!     let text = client.generate("You are a Chaos Entity.", "TARGET IDENTITY: ...").await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::{GeminiClient, GeminiConfig};
pub use error::GeminiError;
