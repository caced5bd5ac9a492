use std::sync::Arc;

use crate::domain::repositories::{
    AgentRepository, SprintRepository, TaskRepository, TeamMemberRepository, TeamRepository,
};
use crate::infrastructure::fixtures;
use crate::infrastructure::repositories::{
    InMemoryAgentRepository, InMemorySprintRepository, InMemoryTaskRepository,
    InMemoryTeamMemberRepository, InMemoryTeamRepository,
};

/// Shared handler state: one repository per resource
///
/// Cloning is cheap; every clone points at the same stores.
#[derive(Clone)]
pub struct AppState {
    pub agents: Arc<dyn AgentRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub sprints: Arc<dyn SprintRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub team_members: Arc<dyn TeamMemberRepository>,
}

impl AppState {
    /// State backed by in-memory stores seeded with the fixtures
    pub fn with_fixtures() -> Self {
        Self {
            agents: Arc::new(InMemoryAgentRepository::new(fixtures::agents())),
            tasks: Arc::new(InMemoryTaskRepository::new(fixtures::tasks())),
            sprints: Arc::new(InMemorySprintRepository::new(fixtures::sprints())),
            teams: Arc::new(InMemoryTeamRepository::new(fixtures::teams())),
            team_members: Arc::new(InMemoryTeamMemberRepository::new(fixtures::team_members())),
        }
    }

    /// State backed by empty in-memory stores
    pub fn empty() -> Self {
        Self {
            agents: Arc::new(InMemoryAgentRepository::new(Vec::new())),
            tasks: Arc::new(InMemoryTaskRepository::new(Vec::new())),
            sprints: Arc::new(InMemorySprintRepository::new(Vec::new())),
            teams: Arc::new(InMemoryTeamRepository::new(Vec::new())),
            team_members: Arc::new(InMemoryTeamMemberRepository::new(Vec::new())),
        }
    }
}
