use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::errors::{ClientError, ClientResult};
use crate::api::handlers::health::HealthResponse;
use crate::api::handlers::team_members::TeamMembersResponse;
use crate::domain::agent::{Agent, AgentPatch};
use crate::domain::sprint::Sprint;
use crate::domain::task::{NewTask, Task, TaskFilter, TaskPatch};
use crate::domain::team::{NewTeam, Team};
use crate::domain::team_member::TeamMember;

/// Error body returned by the simulator
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the `/api` surface
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the simulator at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing reqwest client
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/api/health", &[], "health").await
    }

    pub async fn list_agents(&self) -> ClientResult<Vec<Agent>> {
        self.get("/api/agents", &[], "agents").await
    }

    pub async fn get_agent(&self, id: &str) -> ClientResult<Agent> {
        self.get(&format!("/api/agents/{}", id), &[], "agent").await
    }

    pub async fn update_agent(&self, id: &str, patch: &AgentPatch) -> ClientResult<Agent> {
        self.send(Method::PATCH, &format!("/api/agents/{}", id), patch, "update agent")
            .await
    }

    /// Lists tasks; the filter travels as `?status=`
    pub async fn list_tasks(&self, filter: TaskFilter) -> ClientResult<Vec<Task>> {
        match filter.status {
            Some(status) => {
                self.get("/api/tasks", &[("status", status.as_str())], "tasks")
                    .await
            }
            None => self.get("/api/tasks", &[], "tasks").await,
        }
    }

    pub async fn get_task(&self, id: &str) -> ClientResult<Task> {
        self.get(&format!("/api/tasks/{}", id), &[], "task").await
    }

    pub async fn create_task(&self, input: &NewTask) -> ClientResult<Task> {
        self.send(Method::POST, "/api/tasks", input, "create task")
            .await
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> ClientResult<Task> {
        self.send(Method::PATCH, &format!("/api/tasks/{}", id), patch, "update task")
            .await
    }

    pub async fn list_sprints(&self) -> ClientResult<Vec<Sprint>> {
        self.get("/api/sprints", &[], "sprints").await
    }

    pub async fn get_sprint(&self, id: &str) -> ClientResult<Sprint> {
        self.get(&format!("/api/sprints/{}", id), &[], "sprint").await
    }

    pub async fn list_teams(&self) -> ClientResult<Vec<Team>> {
        self.get("/api/teams", &[], "teams").await
    }

    pub async fn create_team(&self, input: &NewTeam) -> ClientResult<Team> {
        self.send(Method::POST, "/api/teams", input, "create team")
            .await
    }

    pub async fn list_team_members(&self) -> ClientResult<Vec<TeamMember>> {
        let body: TeamMembersResponse = self.get("/api/team-members", &[], "team members").await?;
        Ok(body.members)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        resource: &str,
    ) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::read(response, &format!("Failed to fetch {}", resource)).await
    }

    async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        action: &str,
    ) -> ClientResult<T> {
        tracing::debug!(%method, path, "sending");
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::read(response, &format!("Failed to {}", action)).await
    }

    /// Decodes a success body, or turns a non-2xx answer into
    /// [`ClientError::Status`] carrying the server's message when it sent one
    async fn read<T: DeserializeOwned>(response: Response, fallback: &str) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .unwrap_or_else(|_| fallback.to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/agents"), "http://localhost:3000/api/agents");
    }
}
