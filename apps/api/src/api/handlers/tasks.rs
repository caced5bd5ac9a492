use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::state::AppState;
use crate::domain::task::{NewTask, Task, TaskFilter, TaskPatch, TaskStatus};
use crate::infrastructure::fixtures::DEFAULT_SPRINT_ID;

/// Query string accepted by the task listing
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
}

impl ListTasksQuery {
    /// Converts the raw query into a filter; an empty status means no filter
    ///
    /// Returns `None` for a status no task can have, which matches nothing.
    pub fn into_filter(self) -> Option<TaskFilter> {
        match self.status.as_deref() {
            None | Some("") => Some(TaskFilter::default()),
            Some(raw) => raw.parse::<TaskStatus>().ok().map(TaskFilter::status),
        }
    }
}

/// List tasks, optionally filtered by status
///
/// GET /api/tasks?status=pending
pub async fn list_tasks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Some(filter) = query.into_filter() else {
        tracing::debug!("unknown status filter, no task matches");
        return Ok(Json(Vec::new()));
    };
    let tasks = state
        .tasks
        .find_all(filter)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to list tasks: {}", e)))?;

    Ok(Json(tasks))
}

/// Get a task by ID
///
/// GET /api/tasks/:id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .tasks
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to find task: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    Ok(Json(task))
}

/// Create a new task
///
/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    // New tasks land in the running sprint unless the client picked one
    let default_sprint = state
        .sprints
        .find_active()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to find sprint: {}", e)))?
        .map(|sprint| sprint.id)
        .unwrap_or_else(|| DEFAULT_SPRINT_ID.to_string());

    let id = state.tasks.next_id().await;
    let task = Task::new(id, req, &default_sprint).map_err(ApiError::bad_request)?;

    state
        .tasks
        .save(&task)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save task: {}", e)))?;

    tracing::info!(task_id = %task.id, title = %task.title, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially update a task
///
/// PATCH /api/tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    patch.validate().map_err(ApiError::bad_request)?;

    let task = state
        .tasks
        .update(&id, patch)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update task: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    Ok(Json(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_status_means_no_filter() {
        let query = ListTasksQuery {
            status: Some(String::new()),
        };
        assert_eq!(query.into_filter(), Some(TaskFilter::default()));
    }

    #[test]
    fn known_status_becomes_filter() {
        let query = ListTasksQuery {
            status: Some("blocked".to_string()),
        };
        assert_eq!(
            query.into_filter(),
            Some(TaskFilter::status(TaskStatus::Blocked))
        );
    }

    #[test]
    fn unknown_status_matches_nothing() {
        let query = ListTasksQuery {
            status: Some("done".to_string()),
        };
        assert_eq!(query.into_filter(), None);
    }
}
