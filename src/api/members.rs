//! Member API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::IntoParams;

use super::{error_response, json_error};
use crate::domain::{DomainError, MemberSearchCondition, NewMember};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/members",
    responses((status = 200, description = "All members"))
)]
pub async fn list_members(State(state): State<AppState>) -> impl IntoResponse {
    match state.member_repo.find_all().await {
        Ok(members) => {
            Json(json!({ "members": members, "total": members.len() })).into_response()
        }
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/members",
    responses(
        (status = 201, description = "Member created"),
        (status = 400, description = "Missing username"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<NewMember>,
) -> impl IntoResponse {
    match state.member_repo.create(payload).await {
        Ok(member) => (StatusCode::CREATED, Json(json!({ "member": member }))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member found"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.member_repo.find_by_id(id).await {
        Ok(Some(member)) => (StatusCode::OK, Json(json!({ "member": member }))).into_response(),
        Ok(None) => error_response(DomainError::member_not_found()),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.member_repo.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Member deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Query parameters of the member search. Omitted or blank parameters do not
/// restrict the result.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchMembersQuery {
    /// Exact username
    pub username: Option<String>,
    /// Exact team name
    pub team_name: Option<String>,
    /// Inclusive minimum age
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age_min: Option<i32>,
    /// Inclusive maximum age
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age_max: Option<i32>,
}

/// `age_min=` and `age_min=%20` mean the bound is not set.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid age '{}'", value))),
    }
}

impl From<SearchMembersQuery> for MemberSearchCondition {
    fn from(query: SearchMembersQuery) -> Self {
        let mut condition = MemberSearchCondition::new();
        if let Some(username) = query.username {
            condition = condition.username(username);
        }
        if let Some(team_name) = query.team_name {
            condition = condition.team_name(team_name);
        }
        if let Some(age) = query.age_min {
            condition = condition.age_min(age);
        }
        if let Some(age) = query.age_max {
            condition = condition.age_max(age);
        }
        condition
    }
}

#[utoipa::path(
    get,
    path = "/api/members/search",
    params(SearchMembersQuery),
    responses(
        (status = 200, description = "Matching members with their team"),
        (status = 400, description = "Malformed query parameters")
    )
)]
pub async fn search_members(
    State(state): State<AppState>,
    query: Result<Query<SearchMembersQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return json_error(rejection.status(), rejection.body_text()),
    };
    let condition = MemberSearchCondition::from(query);
    match state.member_repo.search(&condition).await {
        Ok(members) => {
            Json(json!({ "members": members, "total": members.len() })).into_response()
        }
        Err(e) => error_response(e),
    }
}
