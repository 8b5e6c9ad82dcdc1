pub mod health;
pub mod members;
pub mod teams;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Teams
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route("/teams/:id", get(teams::get_team))
        // Members
        .route(
            "/members",
            get(members::list_members).post(members::create_member),
        )
        .route("/members/search", get(members::search_members))
        .route(
            "/members/:id",
            get(members::get_member).delete(members::delete_member),
        )
        .with_state(state)
}

/// Map a domain error to a JSON error response.
pub(crate) fn error_response(e: DomainError) -> Response {
    let status = match &e {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) => {
            tracing::error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    json_error(status, e.to_string())
}

pub(crate) fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
