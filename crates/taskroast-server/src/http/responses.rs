//! HTTP response types for the roast service.

use serde::Serialize;

/// Response when at least one target was processed.
#[derive(Debug, Serialize)]
pub struct RoastResponse {
    /// Always true for a completed run; per-target failures are visible only
    /// in logs and metrics.
    pub success: bool,

    /// Number of targets attempted, delivered or not.
    #[serde(rename = "roastedCount")]
    pub roasted_count: usize,
}

/// Response when no user had overdue tasks.
#[derive(Debug, Serialize)]
pub struct NoTargetsResponse {
    pub message: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
