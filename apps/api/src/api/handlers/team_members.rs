use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team_member::TeamMember;

/// Envelope for the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMembersResponse {
    pub members: Vec<TeamMember>,
}

/// List the team roster
///
/// GET /api/team-members
pub async fn list_team_members(
    State(state): State<AppState>,
) -> Result<Json<TeamMembersResponse>, ApiError> {
    let members = state.team_members.find_all().await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to list team members: {}", e))
    })?;

    Ok(Json(TeamMembersResponse { members }))
}
