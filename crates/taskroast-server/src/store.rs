//! Overdue-target queries against Postgres.
//!
//! The pipeline's only database access: one read-only aggregation per
//! invocation, producing each user with their full overdue-task list.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use thiserror::Error;

use taskroast_core::{OverdueTask, RoastLevel, RoastTarget, UserId};

/// Store-layer errors. These are fatal for the whole invocation: without the
/// target list there is nothing to process.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The aggregation query failed.
    #[error("overdue-target query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Read-side collaborator producing the targets of one invocation.
#[async_trait]
pub trait TargetStore: Send + Sync {
    /// All users with at least one pending task due strictly before `now`,
    /// each bundled with their overdue tasks.
    async fn overdue_targets(&self, now: DateTime<Utc>) -> Result<Vec<RoastTarget>, StoreError>;
}

/// Per-user overdue aggregation. The inner joins guarantee a user shows up
/// only with at least one qualifying task; `GROUP BY u.id` is enough because
/// `id` is the primary key. No ordering is imposed on users or their tasks.
const OVERDUE_TARGETS_SQL: &str = r#"
SELECT u.id,
       u.name,
       u.email,
       u.job_title,
       u.bio,
       u.roast_level::text AS roast_level,
       json_agg(json_build_object('container', c.name, 'title', t.title)) AS tasks
FROM "user" u
JOIN container c ON c."userId" = u.id
JOIN task t ON t.container_id = c.id
WHERE t.status = 'pending'
  AND t.due_at < $1
GROUP BY u.id
"#;

/// One row of the aggregation, before domain mapping.
#[derive(Debug, FromRow)]
struct TargetRow {
    id: String,
    name: String,
    email: String,
    job_title: Option<String>,
    bio: Option<String>,
    roast_level: Option<String>,
    tasks: Json<Vec<OverdueTask>>,
}

impl From<TargetRow> for RoastTarget {
    fn from(row: TargetRow) -> Self {
        RoastTarget {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            job_title: row.job_title.unwrap_or_default(),
            bio: row.bio.unwrap_or_default(),
            // NULL or unrecognized levels fall back to the gentlest persona.
            level: RoastLevel::from_tag(row.roast_level.as_deref().unwrap_or("")),
            tasks: row.tasks.0,
        }
    }
}

/// Postgres-backed [`TargetStore`].
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new PgStore over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TargetStore for PgStore {
    async fn overdue_targets(&self, now: DateTime<Utc>) -> Result<Vec<RoastTarget>, StoreError> {
        let rows: Vec<TargetRow> = sqlx::query_as(OVERDUE_TARGETS_SQL)
            .bind(now)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(RoastTarget::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_full_profile_maps_to_target() {
        let row = TargetRow {
            id: "u-ada".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            job_title: Some("Engineer".to_string()),
            bio: Some("loves deadlines".to_string()),
            roast_level: Some("toxic".to_string()),
            tasks: Json(vec![OverdueTask::new("Daily Tasks", "Write report")]),
        };

        let target = RoastTarget::from(row);
        assert_eq!(target.id.as_str(), "u-ada");
        assert_eq!(target.job_title, "Engineer");
        assert_eq!(target.level, RoastLevel::Toxic);
        assert_eq!(target.tasks.len(), 1);
    }

    #[test]
    fn null_profile_fields_map_to_defaults() {
        let row = TargetRow {
            id: "u1".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            job_title: None,
            bio: None,
            roast_level: None,
            tasks: Json(vec![OverdueTask::new("Weekly Goals", "Ship feature")]),
        };

        let target = RoastTarget::from(row);
        assert_eq!(target.job_title, "");
        assert_eq!(target.bio, "");
        assert_eq!(target.level, RoastLevel::Gentle);
    }
}
