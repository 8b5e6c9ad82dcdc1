use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::teams::list_teams,
        api::teams::create_team,
        api::teams::get_team,
        api::members::list_members,
        api::members::create_member,
        api::members::get_member,
        api::members::delete_member,
        api::members::search_members,
    ),
    tags(
        (name = "member-search", description = "Member search API")
    )
)]
pub struct ApiDoc;
