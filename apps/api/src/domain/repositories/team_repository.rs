use async_trait::async_trait;
use crate::domain::team::Team;

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Reserve the identifier for the next created team
    async fn next_id(&self) -> String;

    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, String>;

    /// List every team in creation order
    async fn find_all(&self) -> Result<Vec<Team>, String>;
}
