//! Axum router and request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use gs_core::catalog;
use gs_core::entities::Idea;
use gs_core::responses::{MessageResponse, ModeInfo};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::service::IdeaService;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<IdeaService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: IdeaService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "inputText", alias = "input_text")]
    pub input_text: String,
    pub mode: String,
}

/// Build the full API router with CORS and request tracing.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/modes", get(list_modes))
        .route("/api/generate", post(generate))
        .route("/api/ideas", get(list_ideas))
        .route("/api/ideas/{id}", get(get_idea).delete(delete_idea))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to GenScript API"))
}

async fn list_modes() -> Json<Vec<ModeInfo>> {
    Json(catalog::entries().iter().map(ModeInfo::from).collect())
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    let Json(request) = payload?;
    let ideas = state
        .service
        .generate(&request.input_text, &request.mode)
        .await?;
    Ok(Json(ideas))
}

async fn list_ideas(State(state): State<AppState>) -> Result<Json<Vec<Idea>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, ApiError> {
    Ok(Json(state.service.get(&id).await?))
}

async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Idea deleted successfully")))
}
