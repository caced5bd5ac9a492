// Team member domain module
// People shown on the team overview with their delivery stats

#![allow(clippy::module_inception)]

pub mod team_member;
pub mod value_objects;

pub use team_member::TeamMember;
pub use value_objects::MemberStatus;
