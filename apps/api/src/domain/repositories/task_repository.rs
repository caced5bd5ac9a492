use async_trait::async_trait;
use crate::domain::task::{Task, TaskFilter, TaskPatch};

/// Repository trait for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Reserve the identifier for the next created task
    async fn next_id(&self) -> String;

    /// Save a task (insert or replace)
    async fn save(&self, task: &Task) -> Result<(), String>;

    /// List tasks passing `filter`, in insertion order
    async fn find_all(&self, filter: TaskFilter) -> Result<Vec<Task>, String>;

    /// Find a task by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, String>;

    /// Merge `patch` onto the task, returning the updated record
    ///
    /// Returns `Ok(None)` when no task has this ID and `Err` when the patch
    /// breaks a task invariant.
    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Option<Task>, String>;
}
