//! Taskroast Server Library
//!
//! This crate provides the roast pipeline as an HTTP service: the
//! overdue-target store, the orchestrator, the scheduled-trigger surface,
//! and state management.

pub mod config;
pub mod http;
pub mod metrics;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use service::RoastService;
pub use state::AppState;
