use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::SprintStatus;

/// Time-boxed grouping of tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub status: SprintStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Sprint {
    /// Creates a sprint starting at `start` and lasting `length`
    pub fn starting_at(
        id: impl Into<String>,
        name: impl Into<String>,
        status: SprintStatus,
        start: DateTime<Utc>,
        length: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            start_date: start,
            end_date: start + length,
            created_at: start,
        }
    }

    /// Returns true when the sprint is currently running
    pub fn is_active(&self) -> bool {
        self.status == SprintStatus::Active
    }

    /// Time between start and end
    pub fn length(&self) -> Duration {
        self.end_date - self.start_date
    }
}
