//! AI Dev Team library
//!
//! A mock REST simulator for a team of AI agents (agents, tasks, sprints,
//! teams and team members), the cached client that polls it, and the
//! terminal dashboard pages built on top.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
