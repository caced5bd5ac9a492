// Request handlers, one module per resource

pub mod agents;
pub mod health;
pub mod sprints;
pub mod tasks;
pub mod team_members;
pub mod teams;
