use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::agent::{Agent, AgentPatch};

/// List all agents
///
/// GET /api/agents
pub async fn list_agents(State(state): State<AppState>) -> Result<Json<Vec<Agent>>, ApiError> {
    let agents = state
        .agents
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to list agents: {}", e)))?;

    Ok(Json(agents))
}

/// Get an agent by ID
///
/// GET /api/agents/:id
pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Agent>, ApiError> {
    let agent = state
        .agents
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to find agent: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Agent not found"))?;

    Ok(Json(agent))
}

/// Partially update an agent
///
/// PATCH /api/agents/:id
pub async fn update_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<AgentPatch>,
) -> Result<Json<Agent>, ApiError> {
    let agent = state
        .agents
        .update(&id, patch)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update agent: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Agent not found"))?;

    Ok(Json(agent))
}
