use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use member_search::api;
use member_search::db;
use member_search::infrastructure::AppState;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a seeded test router
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    member_search::seed::seed_demo_data(&db)
        .await
        .expect("Failed to seed");
    api::api_router(AppState::new(db))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

fn usernames(body: &Value) -> Vec<String> {
    body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["username"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_search_endpoint() {
    let app = setup_test_app().await;

    let (status, body) = get(&app, "/members/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);

    let (status, body) = get(&app, "/members/search?username=member3&age_min=25&age_max=35").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(usernames(&body), vec!["member3"]);
    assert_eq!(body["members"][0]["team_name"], "teamB");

    let (_, body) = get(&app, "/members/search?team_name=teamA").await;
    assert_eq!(usernames(&body), vec!["member1", "member2"]);

    // Blank parameters do not filter
    let (_, body) = get(&app, "/members/search?username=&team_name=").await;
    assert_eq!(body["total"], 4);
}

#[tokio::test]
async fn test_search_rejects_malformed_age() {
    let app = setup_test_app().await;

    let (status, body) = get(&app, "/members/search?age_min=old").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid age"));
}

#[tokio::test]
async fn test_search_blank_age_is_ignored() {
    let app = setup_test_app().await;

    let (status, body) = get(&app, "/members/search?age_min=&age_max=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);

    let (status, body) = get(&app, "/members/search?age_min=&age_max=25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(usernames(&body), vec!["member1", "member2"]);
}

#[tokio::test]
async fn test_member_lifecycle() {
    let app = setup_test_app().await;

    let payload = serde_json::json!({ "username": "member5", "age": 50, "team_id": 1 });
    let req = Request::builder()
        .uri("/members")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["member"]["id"].as_i64().unwrap();

    let (status, body) = get(&app, &format!("/members/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["username"], "member5");

    let (_, body) = get(&app, "/members/search?team_name=teamA&age_min=40").await;
    assert_eq!(usernames(&body), vec!["member5"]);

    let req = Request::builder()
        .uri(format!("/members/{}", id))
        .method("DELETE")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/members/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Member not found");
}

#[tokio::test]
async fn test_create_member_errors() {
    let app = setup_test_app().await;

    let payload = serde_json::json!({ "username": "", "age": 1 });
    let req = Request::builder()
        .uri("/members")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let payload = serde_json::json!({ "username": "ghost", "team_id": 999 });
    let req = Request::builder()
        .uri("/members")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Team not found");

    // Axum's Json extractor returns 400 for malformed JSON
    let req = Request::builder()
        .uri("/members")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_teams_endpoints() {
    let app = setup_test_app().await;

    let (status, body) = get(&app, "/teams").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (status, body) = get(&app, "/teams/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team"]["name"], "teamB");

    let (status, _) = get(&app, "/teams/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = Request::builder()
        .uri("/teams")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"teamC"}"#))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["team"]["name"], "teamC");
}
