//! Taskroast Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Database
//! - Runtime specifics
//!
//! All types here represent the core business domain of the roast pipeline:
//! intensity levels, personas, roast targets, and prompt assembly.

pub mod persona;
pub mod prompt;
pub mod target;

// Re-export commonly used types
pub use persona::{Persona, RoastLevel};
pub use prompt::RoastPrompt;
pub use target::{OverdueTask, RoastTarget, UserId};
