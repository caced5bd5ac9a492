use async_trait::async_trait;
use crate::domain::sprint::Sprint;

/// Read-only repository trait for sprints
#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// List every sprint
    async fn find_all(&self) -> Result<Vec<Sprint>, String>;

    /// Find a sprint by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Sprint>, String>;

    /// First sprint currently marked active
    async fn find_active(&self) -> Result<Option<Sprint>, String> {
        Ok(self.find_all().await?.into_iter().find(Sprint::is_active))
    }
}
