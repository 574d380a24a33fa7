//! Scheduled roast trigger handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::{error, warn};

use crate::http::responses::{ErrorResponse, NoTargetsResponse, RoastResponse};
use crate::service::RoastRun;
use crate::state::AppState;

/// Roast trigger endpoint.
///
/// The external scheduler invokes this with `Authorization: Bearer <secret>`.
/// A bad or missing credential terminates the invocation before any
/// collaborator is touched; per-target failures never reach the caller, who
/// only ever sees the attempted count.
pub async fn trigger_roast(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !bearer_matches(&headers, &state.cron_secret) {
        warn!("roast trigger rejected: bad or missing bearer token");
        state.metrics.record_unauthorized();
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response();
    }

    state.metrics.record_run();

    match state.roaster.run(Utc::now()).await {
        Ok(RoastRun::NoTargets) => Json(NoTargetsResponse {
            message: "No overdue tasks found.",
        })
        .into_response(),
        Ok(RoastRun::Completed(report)) => {
            state
                .metrics
                .record_outcomes(report.attempted() as u64, report.failures().count() as u64);
            Json(RoastResponse {
                success: true,
                roasted_count: report.attempted(),
            })
            .into_response()
        }
        Err(err) => {
            error!(error = %err, "overdue-target query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to query overdue tasks".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Byte-for-byte comparison of the presented bearer token against the
/// configured secret.
fn bearer_matches(headers: &HeaderMap, secret: &str) -> bool {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    value == format!("Bearer {secret}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    use taskroast_core::{RoastPrompt, RoastTarget};
    use taskroast_gemini::GeminiError;
    use taskroast_resend::ResendError;

    use crate::service::{RoastMailer, RoastModel, RoastService};
    use crate::store::{StoreError, TargetStore};

    #[derive(Default)]
    struct CountingStore {
        targets: Vec<RoastTarget>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TargetStore for CountingStore {
        async fn overdue_targets(
            &self,
            _now: DateTime<Utc>,
        ) -> Result<Vec<RoastTarget>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.targets.clone())
        }
    }

    #[derive(Default)]
    struct CountingModel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RoastModel for CountingModel {
        async fn generate(&self, _prompt: &RoastPrompt) -> Result<String, GeminiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("generated roast".to_string())
        }
    }

    #[derive(Default)]
    struct CountingMailer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RoastMailer for CountingMailer {
        async fn send_roast(&self, _to: &str, _roast: &str) -> Result<(), ResendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Harness {
        state: Arc<AppState>,
        store: Arc<CountingStore>,
        model: Arc<CountingModel>,
        mailer: Arc<CountingMailer>,
    }

    fn harness(targets: Vec<RoastTarget>) -> Harness {
        let store = Arc::new(CountingStore {
            targets,
            calls: AtomicUsize::new(0),
        });
        let model = Arc::new(CountingModel::default());
        let mailer = Arc::new(CountingMailer::default());
        let roaster = RoastService::new(store.clone(), model.clone(), mailer.clone());
        Harness {
            state: AppState::new("s3cret", roaster),
            store,
            model,
            mailer,
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        headers
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_credential_is_rejected_before_any_work() {
        let h = harness(vec![
            RoastTarget::new("u1", "Ada", "ada@example.com").with_task("Daily Tasks", "Report")
        ]);

        let response = trigger_roast(State(h.state.clone()), HeaderMap::new())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(h.store.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.model.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.mailer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wrong_credential_is_rejected_before_any_work() {
        let h = harness(vec![
            RoastTarget::new("u1", "Ada", "ada@example.com").with_task("Daily Tasks", "Report")
        ]);

        let response = trigger_roast(State(h.state.clone()), bearer("wrong"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(h.store.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.model.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.mailer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_target_set_reports_no_overdue_tasks() {
        let h = harness(Vec::new());

        let response = trigger_roast(State(h.state.clone()), bearer("s3cret"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "No overdue tasks found.");
        assert_eq!(h.model.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.mailer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn completed_run_reports_attempted_count() {
        let h = harness(vec![
            RoastTarget::new("u1", "Ada", "ada@example.com").with_task("Daily Tasks", "Report"),
            RoastTarget::new("u2", "Grace", "grace@example.com").with_task("Weekly Goals", "Ship"),
        ]);

        let response = trigger_roast(State(h.state.clone()), bearer("s3cret"))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["roastedCount"], 2);
        assert_eq!(h.mailer.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn bearer_comparison_is_exact() {
        assert!(bearer_matches(&bearer("s3cret"), "s3cret"));
        assert!(!bearer_matches(&bearer("s3cret "), "s3cret"));
        assert!(!bearer_matches(&bearer("S3CRET"), "s3cret"));
        assert!(!bearer_matches(&HeaderMap::new(), "s3cret"));
    }
}
