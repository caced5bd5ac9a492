//! Seed data loaded into the stores at startup
//!
//! Timestamps are taken when the fixtures are built, so every process run
//! starts with "fresh" records.

use chrono::{Duration, Utc};

use crate::domain::agent::{Agent, AgentRole, AgentStatus};
use crate::domain::sprint::{Sprint, SprintStatus};
use crate::domain::task::{Task, TaskPriority, TaskStatus};
use crate::domain::team::{Team, TeamStatus};
use crate::domain::team_member::{MemberStatus, TeamMember};

/// Length of the seeded sprint
pub const SPRINT_LENGTH_DAYS: i64 = 14;

/// Sprint new tasks fall into when nothing else is active
pub const DEFAULT_SPRINT_ID: &str = "sprint-1";

/// The five simulated agents
pub fn agents() -> Vec<Agent> {
    let now = Utc::now();
    let agent = |id: &str, name: &str, role, status, task: Option<&str>| Agent {
        id: id.to_string(),
        name: name.to_string(),
        role,
        status,
        current_task_id: task.map(str::to_string),
        created_at: now,
    };

    vec![
        agent("agent-1", "Alex", AgentRole::Architect, AgentStatus::Thinking, Some("task-1")),
        agent("agent-2", "Bailey", AgentRole::Engineer, AgentStatus::Idle, None),
        agent("agent-3", "Casey", AgentRole::Tester, AgentStatus::Idle, None),
        agent("agent-4", "Dakota", AgentRole::Researcher, AgentStatus::Thinking, Some("task-2")),
        agent("agent-5", "Evan", AgentRole::Engineer, AgentStatus::Error, None),
    ]
}

/// Tasks of the first sprint
pub fn tasks() -> Vec<Task> {
    let now = Utc::now();
    let task = |id: &str, title: &str, description: &str, status, agent: Option<&str>| Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        assigned_agent_id: agent.map(str::to_string),
        sprint_id: DEFAULT_SPRINT_ID.to_string(),
        priority: TaskPriority::Medium,
        due_date: None,
        created_at: now,
        updated_at: now,
    };

    vec![
        Task {
            priority: TaskPriority::High,
            ..task(
                "task-1",
                "Design system architecture",
                "Plan the system structure",
                TaskStatus::InProgress,
                Some("agent-1"),
            )
        },
        task(
            "task-2",
            "Research dependencies",
            "Investigate available libraries",
            TaskStatus::InProgress,
            Some("agent-4"),
        ),
        Task {
            priority: TaskPriority::Low,
            ..task(
                "task-3",
                "Set up build pipeline",
                "Configure CI/CD",
                TaskStatus::Pending,
                None,
            )
        },
    ]
}

/// The single active sprint
pub fn sprints() -> Vec<Sprint> {
    vec![Sprint::starting_at(
        DEFAULT_SPRINT_ID,
        "Sprint 1: Foundation",
        SprintStatus::Active,
        Utc::now(),
        Duration::days(SPRINT_LENGTH_DAYS),
    )]
}

/// Teams present before any are created
pub fn teams() -> Vec<Team> {
    let now = Utc::now();
    vec![
        Team::from_parts(
            "team-1".to_string(),
            "Platform".to_string(),
            "Build and run the shared services".to_string(),
            4,
            TeamStatus::Active,
            now,
        ),
        Team::from_parts(
            "team-2".to_string(),
            "Research".to_string(),
            "Evaluate models and tooling".to_string(),
            2,
            TeamStatus::Inactive,
            now - Duration::days(30),
        ),
    ]
}

/// The team roster
pub fn team_members() -> Vec<TeamMember> {
    let member = |n: u32, name: &str, role: &str, status, tasks_completed, performance_score| {
        TeamMember {
            id: format!("member-{}", n),
            name: name.to_string(),
            email: email_for(name),
            role: role.to_string(),
            status,
            tasks_completed,
            performance_score,
        }
    };

    vec![
        member(1, "Alice Johnson", "Frontend Developer", MemberStatus::Active, 24, 4.8),
        member(2, "Bob Smith", "Backend Developer", MemberStatus::Active, 19, 4.5),
        member(3, "Carol Davis", "Frontend Developer", MemberStatus::Away, 15, 4.2),
        member(4, "David Wilson", "DevOps Engineer", MemberStatus::Active, 12, 4.6),
        member(5, "Emma Brown", "QA Engineer", MemberStatus::Inactive, 8, 4.0),
        member(6, "Frank Miller", "Backend Developer", MemberStatus::Active, 21, 4.7),
        member(7, "Grace Lee", "Frontend Developer", MemberStatus::Active, 27, 4.9),
        member(8, "Henry Taylor", "QA Engineer", MemberStatus::Away, 10, 4.1),
    ]
}

/// `Alice Johnson` -> `alice.johnson@devteam.local`
fn email_for(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{}@devteam.local", local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique() {
        let ids: HashSet<_> = agents().into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<_> = team_members().into_iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn busy_agents_point_at_seeded_tasks() {
        let task_ids: HashSet<_> = tasks().into_iter().map(|t| t.id).collect();
        for agent in agents() {
            if let Some(task_id) = agent.current_task_id {
                assert!(task_ids.contains(&task_id));
            }
        }
    }

    #[test]
    fn sprint_spans_two_weeks() {
        let sprint = &sprints()[0];
        assert_eq!(sprint.length(), Duration::days(SPRINT_LENGTH_DAYS));
        assert!(sprint.is_active());
    }

    #[test]
    fn emails_are_derived_from_names() {
        assert_eq!(email_for("Alice Johnson"), "alice.johnson@devteam.local");
    }

    #[test]
    fn only_one_task_is_pending() {
        let pending = tasks()
            .into_iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count();
        assert_eq!(pending, 1);
    }
}
