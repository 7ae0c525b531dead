//! End-to-end HTTP tests through the axum router with `oneshot`.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{AGRI_RESPONSE, CountingStore, StubModel, service};
use gs_server::{AppState, router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app_with(body: &str) -> Router {
    let service = service(StubModel::replying(body), CountingStore::new().await);
    router(AppState::new(service))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_welcomes() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Welcome to GenScript API"}));
}

#[tokio::test]
async fn modes_lists_catalog() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(&app, get("/api/modes")).await;

    assert_eq!(status, StatusCode::OK);
    let modes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["mode"].as_str().unwrap())
        .collect();
    assert_eq!(modes, vec!["research", "business", "python"]);
    assert_eq!(body[0]["fields"], json!(["category", "title", "description"]));
}

#[tokio::test]
async fn generate_returns_camel_case_ideas_without_absent_optionals() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/generate",
            &json!({"inputText": "sustainable agriculture", "mode": "research"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let idea = &body[0];
    assert_eq!(idea["title"], "Vertical Farming ROI");
    assert!(idea["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(idea["createdAt"].as_str().is_some());
    assert!(idea.get("refinedPrompt").is_none());
    assert!(idea.get("moneyValue").is_none());
}

#[tokio::test]
async fn generate_accepts_snake_case_input() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/generate",
            &json!({"input_text": "sustainable agriculture", "mode": "research"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn generate_invalid_mode_is_400() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(
        &app,
        post_json(
            "/api/generate",
            &json!({"inputText": "anything", "mode": "nonexistent"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Invalid mode: nonexistent"}));
}

#[tokio::test]
async fn generate_blank_input_is_400() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(
        &app,
        post_json("/api/generate", &json!({"inputText": "  ", "mode": "research"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn generate_malformed_body_is_400() {
    let app = app_with(AGRI_RESPONSE).await;
    let (status, body) = send(&app, post_json("/api/generate", &json!({"mode": "research"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn generate_model_failure_is_500_with_detail() {
    let service = service(StubModel::failing(), CountingStore::new().await);
    let app = router(AppState::new(service));

    let (status, body) = send(
        &app,
        post_json("/api/generate", &json!({"inputText": "edtech", "mode": "research"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .is_some_and(|d| d.contains("model overloaded"))
    );
}

#[tokio::test]
async fn unknown_idea_is_404() {
    let app = app_with(AGRI_RESPONSE).await;

    let (status, body) = send(&app, get("/api/ideas/doesnotexist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Idea not found"}));

    let (status, body) = send(&app, delete("/api/ideas/doesnotexist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Idea not found"}));
}

#[tokio::test]
async fn generate_list_get_delete_flow() {
    let app = app_with(AGRI_RESPONSE).await;

    let (_, generated) = send(
        &app,
        post_json(
            "/api/generate",
            &json!({"inputText": "sustainable agriculture", "mode": "research"}),
        ),
    )
    .await;
    let id = generated[0]["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&app, get("/api/ideas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, generated);

    let (status, fetched) = send(&app, get(&format!("/api/ideas/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, generated[0]);

    let (status, body) = send(&app, delete(&format!("/api/ideas/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Idea deleted successfully"}));

    let (status, _) = send(&app, delete(&format!("/api/ideas/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, get("/api/ideas")).await;
    assert_eq!(listed, json!([]));
}
