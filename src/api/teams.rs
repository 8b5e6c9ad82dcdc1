//! Team API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use super::error_response;
use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/teams",
    responses((status = 200, description = "All teams"))
)]
pub async fn list_teams(State(state): State<AppState>) -> impl IntoResponse {
    match state.team_repo.find_all().await {
        Ok(teams) => Json(json!({ "teams": teams, "total": teams.len() })).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/teams",
    responses(
        (status = 201, description = "Team created"),
        (status = 400, description = "Missing team name")
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamRequest>,
) -> impl IntoResponse {
    match state.team_repo.create(payload.name).await {
        Ok(team) => (StatusCode::CREATED, Json(json!({ "team": team }))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team found"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.team_repo.find_by_id(id).await {
        Ok(Some(team)) => (StatusCode::OK, Json(json!({ "team": team }))).into_response(),
        Ok(None) => error_response(DomainError::team_not_found()),
        Err(e) => error_response(e),
    }
}
