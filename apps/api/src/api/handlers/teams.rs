use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::team::{NewTeam, Team};

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewTeam>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    // Create team domain entity
    let id = state.teams.next_id().await;
    let team = Team::new(id, req).map_err(ApiError::bad_request)?;

    // Save to the store
    state
        .teams
        .save(&team)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?;

    tracing::info!(team_id = %team.id(), name = %team.name(), "team created");
    Ok((StatusCode::CREATED, Json(team)))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    let team = state
        .teams
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to find team: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;

    Ok(Json(team))
}

/// List all teams
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state
        .teams
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to list teams: {}", e)))?;

    Ok(Json(teams))
}
