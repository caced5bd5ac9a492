use async_trait::async_trait;

use super::memory_store::MemoryStore;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Teams live for the lifetime of the process and are never deleted.
pub struct InMemoryTeamRepository {
    store: MemoryStore<Team>,
}

impl InMemoryTeamRepository {
    /// Creates a new InMemoryTeamRepository
    ///
    /// # Arguments
    /// * `teams` - Records present before the first request
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            store: MemoryStore::new("team", teams),
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn next_id(&self) -> String {
        self.store.next_id()
    }

    async fn save(&self, team: &Team) -> Result<(), String> {
        self.store.upsert(team.clone()).await;
        tracing::debug!(team_id = %team.id(), name = %team.name(), "team saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Team>, String> {
        Ok(self.store.find(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        Ok(self.store.all().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::NewTeam;
    use crate::infrastructure::fixtures;

    #[tokio::test]
    async fn saved_team_is_listed_last() {
        let repo = InMemoryTeamRepository::new(fixtures::teams());
        let team = Team::new(
            repo.next_id().await,
            NewTeam {
                name: "Core".to_string(),
                description: "desc".to_string(),
                member_count: 3,
            },
        )
        .unwrap();

        repo.save(&team).await.unwrap();

        let teams = repo.find_all().await.unwrap();
        assert_eq!(teams.last(), Some(&team));
        assert_eq!(repo.find_by_id(team.id()).await.unwrap(), Some(team));
    }

    #[tokio::test]
    async fn generated_ids_skip_fixtures() {
        let repo = InMemoryTeamRepository::new(fixtures::teams());
        let first = repo.next_id().await;
        let second = repo.next_id().await;

        assert_eq!(first, "team-3");
        assert_eq!(second, "team-4");
    }
}
