use async_trait::async_trait;

use super::memory_store::MemoryStore;
use crate::domain::repositories::TaskRepository;
use crate::domain::task::{Task, TaskFilter, TaskPatch};

/// In-memory implementation of TaskRepository
pub struct InMemoryTaskRepository {
    store: MemoryStore<Task>,
}

impl InMemoryTaskRepository {
    /// Creates a repository holding `tasks`
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            store: MemoryStore::new("task", tasks),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn next_id(&self) -> String {
        self.store.next_id()
    }

    async fn save(&self, task: &Task) -> Result<(), String> {
        self.store.upsert(task.clone()).await;
        tracing::debug!(task_id = %task.id, status = %task.status, "task saved");
        Ok(())
    }

    async fn find_all(&self, filter: TaskFilter) -> Result<Vec<Task>, String> {
        Ok(self.store.filtered(|task| filter.matches(task)).await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, String> {
        Ok(self.store.find(id).await)
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Option<Task>, String> {
        match self.store.modify(id, |task| task.apply(patch)).await {
            None => Ok(None),
            Some((task, Ok(()))) => {
                tracing::debug!(task_id = %id, status = %task.status, "task updated");
                Ok(Some(task))
            }
            Some((_, Err(e))) => Err(e),
        }
    }
}
