use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{TaskPriority, TaskStatus};
use crate::domain::patch::nullable;

/// A unit of work within a sprint
///
/// # Invariants
/// - Title is never blank
/// - `updated_at` is never earlier than `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assigned_agent_id: Option<String>,
    pub sprint_id: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Fields a client may change on a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_agent_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Checks the patch against task invariants before it is applied
    pub fn validate(&self) -> Result<(), String> {
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err("Title cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Single equality predicate accepted by the task listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Filter matching only `status`
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Returns true when `task` passes the filter
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.status == status)
    }
}

impl Task {
    /// Creates a task from a client request
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `input` - The request body
    /// * `default_sprint_id` - Sprint used when the request names none
    ///
    /// # Business Rules Enforced
    /// - Title must not be blank
    /// - Status defaults to Pending, priority to Medium
    /// - `created_at` and `updated_at` start equal
    pub fn new(id: String, input: NewTask, default_sprint_id: &str) -> Result<Self, String> {
        if input.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }

        let now = Utc::now();
        Ok(Self {
            id,
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or(TaskStatus::Pending),
            assigned_agent_id: input.assigned_agent_id.filter(|a| !a.is_empty()),
            sprint_id: input
                .sprint_id
                .unwrap_or_else(|| default_sprint_id.to_string()),
            priority: input.priority.unwrap_or_default(),
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Shallow-merges `patch` and refreshes `updated_at`
    ///
    /// An invalid patch is rejected and leaves the task unchanged.
    pub fn apply(&mut self, patch: TaskPatch) -> Result<(), String> {
        patch.validate()?;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assigned_agent_id) = patch.assigned_agent_id {
            self.assigned_agent_id = assigned_agent_id;
        }
        if let Some(sprint_id) = patch.sprint_id {
            self.sprint_id = sprint_id;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }

        self.updated_at = Utc::now().max(self.created_at);
        Ok(())
    }
}
