use async_trait::async_trait;

use super::memory_store::MemoryStore;
use crate::domain::agent::{Agent, AgentPatch};
use crate::domain::repositories::AgentRepository;

/// In-memory implementation of AgentRepository
pub struct InMemoryAgentRepository {
    store: MemoryStore<Agent>,
}

impl InMemoryAgentRepository {
    /// Creates a repository holding `agents`
    pub fn new(agents: Vec<Agent>) -> Self {
        Self {
            store: MemoryStore::new("agent", agents),
        }
    }
}

#[async_trait]
impl AgentRepository for InMemoryAgentRepository {
    async fn find_all(&self) -> Result<Vec<Agent>, String> {
        Ok(self.store.all().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Agent>, String> {
        Ok(self.store.find(id).await)
    }

    async fn update(&self, id: &str, patch: AgentPatch) -> Result<Option<Agent>, String> {
        let updated = self
            .store
            .modify(id, |agent| patch.apply(agent))
            .await
            .map(|(agent, ())| agent);

        if updated.is_some() {
            tracing::debug!(agent_id = %id, "agent updated");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agent::AgentStatus;
    use crate::infrastructure::fixtures;

    #[tokio::test]
    async fn lists_seeded_agents() {
        let repo = InMemoryAgentRepository::new(fixtures::agents());
        let agents = repo.find_all().await.unwrap();

        assert_eq!(agents.len(), 5);
        assert_eq!(agents[0].id, "agent-1");
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let repo = InMemoryAgentRepository::new(fixtures::agents());
        assert!(repo.find_by_id("agent-42").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_persists_merge() {
        let repo = InMemoryAgentRepository::new(fixtures::agents());
        let patch = AgentPatch {
            status: Some(AgentStatus::Error),
            ..Default::default()
        };

        let updated = repo.update("agent-2", patch).await.unwrap().unwrap();
        let stored = repo.find_by_id("agent-2").await.unwrap().unwrap();

        assert_eq!(updated.status, AgentStatus::Error);
        assert_eq!(stored, updated);
        assert_eq!(stored.name, "Bailey");
    }

    #[tokio::test]
    async fn update_unknown_is_none() {
        let repo = InMemoryAgentRepository::new(fixtures::agents());
        let result = repo.update("agent-42", AgentPatch::default()).await.unwrap();
        assert!(result.is_none());
    }
}
