use async_trait::async_trait;

use super::memory_store::MemoryStore;
use crate::domain::repositories::TeamMemberRepository;
use crate::domain::team_member::TeamMember;

/// In-memory implementation of TeamMemberRepository
pub struct InMemoryTeamMemberRepository {
    store: MemoryStore<TeamMember>,
}

impl InMemoryTeamMemberRepository {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            store: MemoryStore::new("member", members),
        }
    }
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamMemberRepository {
    async fn find_all(&self) -> Result<Vec<TeamMember>, String> {
        Ok(self.store.all().await)
    }
}
