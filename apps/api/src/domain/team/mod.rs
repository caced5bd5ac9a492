// Team domain module
// Contains the team aggregate and its value objects

#![allow(clippy::module_inception)]

pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use team::{NewTeam, Team, MAX_MEMBER_COUNT};
pub use value_objects::TeamStatus;
