//! Standard queries, one per dashboard resource

use std::time::Duration;

use super::cache::QueryKey;
use super::errors::ClientResult;
use super::query::{QueryClient, QueryHandle, QueryOptions};
use crate::domain::agent::Agent;
use crate::domain::sprint::Sprint;
use crate::domain::task::{Task, TaskFilter, TaskStatus};
use crate::domain::team::Team;
use crate::domain::team_member::TeamMember;

/// Agents poll this often, including in the background
pub const AGENTS_REFETCH: Duration = Duration::from_secs(5);
/// Stale time shared by tasks, teams and team members
pub const LIST_STALE: Duration = Duration::from_secs(5);
/// Poll period shared by tasks, teams and team members
pub const LIST_REFETCH: Duration = Duration::from_secs(15);
pub const SPRINTS_REFETCH: Duration = Duration::from_secs(30);

/// Segment used for the unfiltered task list
const ALL: &str = "all";

pub mod keys {
    use super::*;

    pub fn agents() -> QueryKey {
        QueryKey::from(["agents"])
    }

    /// Prefix of every task query
    pub fn tasks() -> QueryKey {
        QueryKey::from(["tasks"])
    }

    /// `["tasks", status]`, or `["tasks", "all"]` without a filter
    pub fn task_list(filter: TaskFilter) -> QueryKey {
        let segment = filter.status.map_or(ALL, |status| status.as_str());
        QueryKey::from(["tasks", segment])
    }

    pub fn task(id: &str) -> QueryKey {
        QueryKey::from(["tasks", id])
    }

    pub fn sprints() -> QueryKey {
        QueryKey::from(["sprints"])
    }

    pub fn teams() -> QueryKey {
        QueryKey::from(["teams"])
    }

    pub fn team_members() -> QueryKey {
        QueryKey::from(["team-members"])
    }
}

pub fn agents_options() -> QueryOptions {
    QueryOptions::new(keys::agents())
        .refetch_interval(AGENTS_REFETCH)
        .in_background(true)
}

pub fn tasks_options(filter: TaskFilter) -> QueryOptions {
    QueryOptions::new(keys::task_list(filter))
        .stale_time(LIST_STALE)
        .refetch_interval(LIST_REFETCH)
}

/// Disabled while `id` is empty
pub fn task_options(id: &str) -> QueryOptions {
    QueryOptions::new(keys::task(id))
        .stale_time(LIST_STALE)
        .refetch_interval(LIST_REFETCH)
        .enabled(!id.is_empty())
}

pub fn sprints_options() -> QueryOptions {
    QueryOptions::new(keys::sprints()).refetch_interval(SPRINTS_REFETCH)
}

pub fn teams_options() -> QueryOptions {
    QueryOptions::new(keys::teams())
        .stale_time(LIST_STALE)
        .refetch_interval(LIST_REFETCH)
}

pub fn team_members_options() -> QueryOptions {
    QueryOptions::new(keys::team_members())
        .stale_time(LIST_STALE)
        .refetch_interval(LIST_REFETCH)
}

impl QueryClient {
    pub async fn agents(&self) -> ClientResult<Vec<Agent>> {
        self.fetch(&agents_options(), |api| async move { api.list_agents().await })
            .await
    }

    pub fn watch_agents(&self) -> QueryHandle<Vec<Agent>> {
        self.watch(agents_options(), |api| async move { api.list_agents().await })
    }

    pub async fn tasks(&self, filter: TaskFilter) -> ClientResult<Vec<Task>> {
        self.fetch(&tasks_options(filter), |api| async move {
            api.list_tasks(filter).await
        })
        .await
    }

    pub fn watch_tasks(&self, filter: TaskFilter) -> QueryHandle<Vec<Task>> {
        self.watch(tasks_options(filter), move |api| async move {
            api.list_tasks(filter).await
        })
    }

    pub async fn task(&self, id: &str) -> ClientResult<Task> {
        let owned = id.to_string();
        self.fetch(&task_options(id), |api| async move { api.get_task(&owned).await })
            .await
    }

    pub fn watch_task(&self, id: &str) -> QueryHandle<Task> {
        let owned = id.to_string();
        self.watch(task_options(id), move |api| {
            let id = owned.clone();
            async move { api.get_task(&id).await }
        })
    }

    pub async fn sprints(&self) -> ClientResult<Vec<Sprint>> {
        self.fetch(&sprints_options(), |api| async move { api.list_sprints().await })
            .await
    }

    pub async fn teams(&self) -> ClientResult<Vec<Team>> {
        self.fetch(&teams_options(), |api| async move { api.list_teams().await })
            .await
    }

    pub fn watch_teams(&self) -> QueryHandle<Vec<Team>> {
        self.watch(teams_options(), |api| async move { api.list_teams().await })
    }

    pub async fn team_members(&self) -> ClientResult<Vec<TeamMember>> {
        self.fetch(&team_members_options(), |api| async move {
            api.list_team_members().await
        })
        .await
    }

    pub fn watch_team_members(&self) -> QueryHandle<Vec<TeamMember>> {
        self.watch(team_members_options(), |api| async move {
            api.list_team_members().await
        })
    }

    /// Marks every task query stale
    pub fn invalidate_tasks(&self) -> usize {
        self.invalidate(&keys::tasks())
    }

    /// Marks the task list for one status stale
    pub fn invalidate_tasks_by_status(&self, status: TaskStatus) -> usize {
        self.invalidate(&keys::task_list(TaskFilter::status(status)))
    }
}
