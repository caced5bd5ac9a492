use async_trait::async_trait;
use crate::domain::team_member::TeamMember;

/// Read-only repository trait for the team roster
#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// List every team member
    async fn find_all(&self) -> Result<Vec<TeamMember>, String>;
}
