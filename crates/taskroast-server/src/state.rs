//! Shared application state.

use std::sync::Arc;

use crate::metrics::Metrics;
use crate::service::RoastService;

/// Shared application state handed to every HTTP handler.
pub struct AppState {
    /// Pre-shared secret the scheduled trigger must present.
    pub cron_secret: String,

    /// The roast pipeline orchestrator.
    pub roaster: RoastService,

    /// Process-lifetime counters for the `/metrics` endpoint.
    pub metrics: Metrics,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(cron_secret: impl Into<String>, roaster: RoastService) -> Arc<Self> {
        Arc::new(Self {
            cron_secret: cron_secret.into(),
            roaster,
            metrics: Metrics::default(),
        })
    }
}
