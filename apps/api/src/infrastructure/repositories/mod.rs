// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces over process memory

pub mod in_memory_agent_repository;
pub mod in_memory_sprint_repository;
pub mod in_memory_task_repository;
pub mod in_memory_team_member_repository;
pub mod in_memory_team_repository;
pub mod memory_store;

pub use in_memory_agent_repository::InMemoryAgentRepository;
pub use in_memory_sprint_repository::InMemorySprintRepository;
pub use in_memory_task_repository::InMemoryTaskRepository;
pub use in_memory_team_member_repository::InMemoryTeamMemberRepository;
pub use in_memory_team_repository::InMemoryTeamRepository;
pub use memory_store::{MemoryStore, Record};
