//! Roast targets: user profiles bundled with their overdue tasks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::persona::RoastLevel;

/// Unique identifier for a user, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A pending task whose due time has passed, paired with the name of the
/// container it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueTask {
    /// Task title.
    pub title: String,
    /// Container holding the task ("Daily Tasks", "Weekly Goals", ...).
    pub container: String,
}

impl OverdueTask {
    /// Create a new OverdueTask.
    pub fn new(container: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            container: container.into(),
        }
    }
}

/// A user selected for one roast-and-notify cycle: the profile fields the
/// prompt needs, plus the overdue tasks that got them here.
///
/// Targets only exist for users with at least one qualifying task; the store
/// enforces this with inner joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastTarget {
    /// User identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Destination email address.
    pub email: String,

    /// Job title; empty when the user never filled it in.
    pub job_title: String,

    /// Free-text bio; empty when the user never filled it in.
    pub bio: String,

    /// Opted-in roast intensity.
    pub level: RoastLevel,

    /// Overdue tasks, in the order the aggregation produced them.
    pub tasks: Vec<OverdueTask>,
}

impl RoastTarget {
    /// Create a target with empty profile extras and no tasks.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            job_title: String::new(),
            bio: String::new(),
            level: RoastLevel::default(),
            tasks: Vec::new(),
        }
    }

    /// Builder method to set the job title.
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    /// Builder method to set the bio.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Builder method to set the roast level.
    pub fn with_level(mut self, level: RoastLevel) -> Self {
        self.level = level;
        self
    }

    /// Builder method to append an overdue task.
    pub fn with_task(mut self, container: impl Into<String>, title: impl Into<String>) -> Self {
        self.tasks.push(OverdueTask::new(container, title));
        self
    }
}
