use async_trait::async_trait;
use crate::domain::agent::{Agent, AgentPatch};

/// Repository trait for agents
///
/// Agents are seeded, listed and patched; they are never created or
/// deleted through the API.
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// List every agent in insertion order
    async fn find_all(&self) -> Result<Vec<Agent>, String>;

    /// Find an agent by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Agent>, String>;

    /// Merge `patch` onto the agent, returning the updated record
    ///
    /// Returns `Ok(None)` when no agent has this ID.
    async fn update(&self, id: &str, patch: AgentPatch) -> Result<Option<Agent>, String>;
}
