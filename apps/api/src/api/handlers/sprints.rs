use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::sprint::Sprint;

/// List all sprints
///
/// GET /api/sprints
pub async fn list_sprints(State(state): State<AppState>) -> Result<Json<Vec<Sprint>>, ApiError> {
    let sprints = state
        .sprints
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to list sprints: {}", e)))?;

    Ok(Json(sprints))
}

/// Get a sprint by ID
///
/// GET /api/sprints/:id
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Sprint>, ApiError> {
    let sprint = state
        .sprints
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to find sprint: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Sprint not found"))?;

    Ok(Json(sprint))
}
