//! HTTP surface for the roast service.
//!
//! Provides endpoints for:
//! - Scheduled roast trigger (`/v1/cron/roast`)
//! - Health check (`/health`)
//! - Prometheus metrics (`/metrics`)

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Trigger route
        .route("/v1/cron/roast", get(handlers::trigger_roast))
        // Observability routes
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
