use async_trait::async_trait;

use super::memory_store::MemoryStore;
use crate::domain::repositories::SprintRepository;
use crate::domain::sprint::Sprint;

/// In-memory implementation of SprintRepository
pub struct InMemorySprintRepository {
    store: MemoryStore<Sprint>,
}

impl InMemorySprintRepository {
    /// Creates a repository holding `sprints`
    pub fn new(sprints: Vec<Sprint>) -> Self {
        Self {
            store: MemoryStore::new("sprint", sprints),
        }
    }
}

#[async_trait]
impl SprintRepository for InMemorySprintRepository {
    async fn find_all(&self) -> Result<Vec<Sprint>, String> {
        Ok(self.store.all().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Sprint>, String> {
        Ok(self.store.find(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[tokio::test]
    async fn finds_active_sprint() {
        let repo = InMemorySprintRepository::new(fixtures::sprints());
        let active = repo.find_active().await.unwrap().unwrap();
        assert_eq!(active.id, "sprint-1");
    }

    #[tokio::test]
    async fn no_active_sprint_in_empty_store() {
        let repo = InMemorySprintRepository::new(vec![]);
        assert!(repo.find_active().await.unwrap().is_none());
    }
}
