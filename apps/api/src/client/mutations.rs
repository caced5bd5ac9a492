//! Writes against the simulator and their effect on cached queries

use super::cache::QueryKey;
use super::errors::ClientResult;
use super::queries::keys;
use super::query::QueryClient;
use crate::domain::agent::{Agent, AgentPatch};
use crate::domain::task::{NewTask, Task, TaskFilter, TaskPatch, TaskStatus};
use crate::domain::team::{NewTeam, Team};

impl QueryClient {
    /// Creates a team and appends it to the cached team list
    ///
    /// The list is not refetched; when nothing is cached yet the new team
    /// becomes the whole list.
    pub async fn create_team(&self, input: &NewTeam) -> ClientResult<Team> {
        let team = self.api().create_team(input).await?;

        self.cache().update(&keys::teams(), |current: Option<Vec<Team>>| {
            let mut teams = current.unwrap_or_default();
            teams.push(team.clone());
            teams
        })?;

        tracing::info!(team_id = %team.id(), "team created");
        Ok(team)
    }

    /// Creates a task and marks every task query stale
    pub async fn create_task(&self, input: &NewTask) -> ClientResult<Task> {
        let task = self.api().create_task(input).await?;
        self.invalidate_tasks();

        tracing::info!(task_id = %task.id, "task created");
        Ok(task)
    }

    /// Patches a task and writes the result back into the cache
    ///
    /// The unfiltered list and the single-task entry are updated in place;
    /// status-filtered lists are invalidated because the task may have
    /// moved between them.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> ClientResult<Task> {
        let task = self.api().update_task(id, patch).await?;

        replace_in_list(self, &keys::task_list(TaskFilter::default()), &task, |t| &t.id)?;
        if self.cache().get::<Task>(&keys::task(&task.id)).is_some() {
            self.cache().set(&keys::task(&task.id), &task)?;
        }
        for status in TaskStatus::ALL {
            self.invalidate_tasks_by_status(*status);
        }

        Ok(task)
    }

    pub async fn update_task_status(&self, id: &str, status: TaskStatus) -> ClientResult<Task> {
        let patch = TaskPatch {
            status: Some(status),
            ..TaskPatch::default()
        };
        self.update_task(id, &patch).await
    }

    /// Patches an agent and replaces it in the cached agent list
    pub async fn update_agent(&self, id: &str, patch: &AgentPatch) -> ClientResult<Agent> {
        let agent = self.api().update_agent(id, patch).await?;
        replace_in_list(self, &keys::agents(), &agent, |a| &a.id)?;
        Ok(agent)
    }
}

/// Swaps the record with the same id inside a cached list, if one is cached
fn replace_in_list<T, F>(client: &QueryClient, key: &QueryKey, record: &T, id: F) -> ClientResult<()>
where
    T: Clone + serde::Serialize + serde::de::DeserializeOwned,
    F: Fn(&T) -> &String,
{
    client.cache().modify(key, |records: &mut Vec<T>| {
        match records.iter().position(|r| id(r) == id(record)) {
            Some(index) => {
                records[index] = record.clone();
                true
            }
            None => false,
        }
    })?;

    Ok(())
}
