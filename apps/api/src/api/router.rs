use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{agents, health, sprints, tasks, team_members, teams};
use crate::api::state::AppState;

/// Builds the full `/api` router over `state`
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        // Agent routes
        .route("/api/agents", get(agents::list_agents))
        .route(
            "/api/agents/:id",
            get(agents::get_agent).patch(agents::update_agent),
        )
        // Task routes
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/api/tasks/:id",
            get(tasks::get_task).patch(tasks::update_task),
        )
        // Sprint routes
        .route("/api/sprints", get(sprints::list_sprints))
        .route("/api/sprints/:id", get(sprints::get_sprint))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/team-members", get(team_members::list_team_members))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
