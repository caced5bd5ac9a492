// Agent domain module
// Simulated workers, their roles and liveness status

#![allow(clippy::module_inception)]

pub mod agent;
pub mod value_objects;

pub use agent::{Agent, AgentPatch};
pub use value_objects::{AgentRole, AgentStatus};
