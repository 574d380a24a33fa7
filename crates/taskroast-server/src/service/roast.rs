//! The roast orchestrator.
//!
//! One invocation queries every user with overdue tasks, then walks the
//! targets in query order: build prompt, generate, dispatch. A failure is
//! terminal for that target only; the batch always runs to the end and the
//! reported count covers every target attempted, delivered or not.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info};

use taskroast_core::{RoastPrompt, RoastTarget, UserId};
use taskroast_gemini::{GeminiClient, GeminiError};
use taskroast_resend::{ResendClient, ResendError};

use crate::store::{StoreError, TargetStore};

/// Subject line for every roast email.
const ROAST_SUBJECT: &str = "Your Task Update";

/// Per-target failure. Either stage is terminal for the target; the
/// orchestrator logs it and moves on to the next one.
#[derive(Debug, Error)]
pub enum RoastError {
    /// The generative call failed.
    #[error("model generation failed: {0}")]
    Generation(#[from] GeminiError),

    /// The email send failed.
    #[error("email dispatch failed: {0}")]
    Dispatch(#[from] ResendError),
}

/// Text-generation collaborator.
#[async_trait]
pub trait RoastModel: Send + Sync {
    /// Generate roast text for one prompt.
    async fn generate(&self, prompt: &RoastPrompt) -> Result<String, GeminiError>;
}

#[async_trait]
impl RoastModel for GeminiClient {
    async fn generate(&self, prompt: &RoastPrompt) -> Result<String, GeminiError> {
        GeminiClient::generate(self, &prompt.persona, &prompt.material).await
    }
}

/// Email-dispatch collaborator.
#[async_trait]
pub trait RoastMailer: Send + Sync {
    /// Deliver generated roast text to one address.
    async fn send_roast(&self, to: &str, roast: &str) -> Result<(), ResendError>;
}

#[async_trait]
impl RoastMailer for ResendClient {
    async fn send_roast(&self, to: &str, roast: &str) -> Result<(), ResendError> {
        let email_id = self.send_text(to, ROAST_SUBJECT, roast).await?;
        debug!(email_id = %email_id, "email accepted by provider");
        Ok(())
    }
}

/// Outcome of one target's roast-and-notify cycle.
#[derive(Debug)]
pub struct TargetOutcome {
    /// The target's user id, for attribution.
    pub user_id: UserId,

    /// Destination address the dispatch was (or would have been) sent to.
    pub email: String,

    /// Success, or the stage that failed.
    pub result: Result<(), RoastError>,
}

impl TargetOutcome {
    /// True when the roast was generated and accepted for delivery.
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate of one completed invocation, in target order.
#[derive(Debug)]
pub struct RoastReport {
    /// One outcome per target, in processing order.
    pub outcomes: Vec<TargetOutcome>,
}

impl RoastReport {
    /// Number of targets processed, successes and failures alike. This is
    /// what the trigger caller sees as `roastedCount`.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of targets whose roast was generated and dispatched.
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_delivered()).count()
    }

    /// Failed outcomes, for logging and metrics.
    pub fn failures(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes.iter().filter(|o| !o.is_delivered())
    }
}

/// Result of one orchestrator invocation.
#[derive(Debug)]
pub enum RoastRun {
    /// Nobody had overdue tasks. Not an error.
    NoTargets,

    /// Every target was attempted.
    Completed(RoastReport),
}

/// The roast pipeline orchestrator.
///
/// Owns its three collaborators behind seams so tests can substitute
/// call-counting doubles and production wires in Postgres, Gemini, and
/// Resend.
pub struct RoastService {
    store: Arc<dyn TargetStore>,
    model: Arc<dyn RoastModel>,
    mailer: Arc<dyn RoastMailer>,
}

impl RoastService {
    /// Create a new RoastService over its collaborators.
    pub fn new(
        store: Arc<dyn TargetStore>,
        model: Arc<dyn RoastModel>,
        mailer: Arc<dyn RoastMailer>,
    ) -> Self {
        Self {
            store,
            model,
            mailer,
        }
    }

    /// Run one invocation over every target overdue at `now`.
    ///
    /// Only a store failure propagates. Per-target failures are recorded in
    /// the report and never abort the batch; repeated invocations over an
    /// unchanged overdue set will re-send the same notifications.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RoastRun, StoreError> {
        let targets = self.store.overdue_targets(now).await?;
        if targets.is_empty() {
            info!("no overdue tasks found");
            return Ok(RoastRun::NoTargets);
        }

        info!(targets = targets.len(), "processing overdue targets");

        let mut outcomes = Vec::with_capacity(targets.len());
        for target in targets {
            let result = self.roast_target(&target).await;
            match &result {
                Ok(()) => info!(user_id = %target.id, "roast delivered"),
                Err(err) => error!(user_id = %target.id, error = %err, "failed to roast user"),
            }
            outcomes.push(TargetOutcome {
                user_id: target.id,
                email: target.email,
                result,
            });
        }

        Ok(RoastRun::Completed(RoastReport { outcomes }))
    }

    /// One target's cycle: prompt, model, email.
    async fn roast_target(&self, target: &RoastTarget) -> Result<(), RoastError> {
        let prompt = RoastPrompt::build(target);
        let roast = self.model.generate(&prompt).await?;
        self.mailer.send_roast(&target.email, &roast).await?;
        Ok(())
    }
}
