// Repository interfaces (ports)
// Infrastructure provides the implementations

pub mod agent_repository;
pub mod sprint_repository;
pub mod task_repository;
pub mod team_member_repository;
pub mod team_repository;

pub use agent_repository::AgentRepository;
pub use sprint_repository::SprintRepository;
pub use task_repository::TaskRepository;
pub use team_member_repository::TeamMemberRepository;
pub use team_repository::TeamRepository;
