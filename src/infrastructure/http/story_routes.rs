//! Outline and story API routes

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::{pacing_for_outline, DraftedContent, StoryGenerationError};
use crate::domain::entities::{Story, StoryOutline};
use crate::domain::services::{chapter_titles, OutlineRequest};
use crate::domain::value_objects::{GenerationOptions, PlotBeatId, StoryId};
use crate::infrastructure::state::AppState;

/// Outline plus the chapter titles it will produce
#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    #[serde(flatten)]
    pub outline: StoryOutline,
    pub chapter_titles: Vec<String>,
}

impl From<StoryOutline> for OutlineResponse {
    fn from(outline: StoryOutline) -> Self {
        Self {
            chapter_titles: chapter_titles(&outline.plot_points),
            outline,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PacingRequest {
    pub outline: StoryOutline,
    #[serde(default)]
    pub target_word_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PacingQuery {
    #[serde(default)]
    pub target_word_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterRequest {
    pub outline: StoryOutline,
    #[serde(default)]
    pub options: GenerationOptions,
    pub chapter: u32,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub outline: StoryOutline,
    #[serde(default)]
    pub options: GenerationOptions,
}

fn error_response(e: StoryGenerationError) -> (StatusCode, String) {
    let status = match &e {
        StoryGenerationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        StoryGenerationError::NotFound(_) | StoryGenerationError::NoSuchChapter(_) => {
            StatusCode::NOT_FOUND
        }
        StoryGenerationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Story request failed: {}", e);
    }
    (status, e.to_string())
}

fn parse_story_id(id: &str) -> Result<StoryId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(StoryId::from)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid story ID".to_string()))
}

/// Generate an outline without drafting prose
pub async fn create_outline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OutlineRequest>,
) -> Result<Json<OutlineResponse>, (StatusCode, String)> {
    state
        .story_service
        .create_outline(&req)
        .map(|outline| Json(outline.into()))
        .map_err(error_response)
}

/// Advisory word budget per beat
pub async fn outline_pacing(Json(req): Json<PacingRequest>) -> Json<HashMap<PlotBeatId, u32>> {
    Json(pacing_for_outline(&req.outline, req.target_word_count))
}

/// Draft prose for an outline without storing it
pub async fn draft_outline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftRequest>,
) -> Json<DraftedContent> {
    Json(
        state
            .story_service
            .generate_story_content(&req.outline, &req.options, state.shutdown.signal())
            .await,
    )
}

/// Rule-based markdown document for an outline
pub async fn outline_prose(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftRequest>,
) -> impl IntoResponse {
    let document = state.story_service.compose_prose(&req.outline, &req.options);
    ([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], document)
}

/// A single `## Chapter N: title` block, delegated to the AI provider when
/// requested; a failed provider call yields the stub chapter instead
pub async fn draft_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChapterRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let chapter = state
        .story_service
        .draft_chapter(&req.outline, &req.options, req.chapter)
        .await
        .map_err(error_response)?;
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], chapter))
}

/// Generate and store a complete story
pub async fn create_story(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OutlineRequest>,
) -> Result<(StatusCode, Json<Story>), (StatusCode, String)> {
    let story = state
        .story_service
        .generate_story(&req, state.shutdown.signal())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(story)))
}

pub async fn list_stories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Story>>, (StatusCode, String)> {
    state
        .story_service
        .list_stories()
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn get_story(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Story>, (StatusCode, String)> {
    let id = parse_story_id(&id)?;
    state
        .story_service
        .get_story(id)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn delete_story(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_story_id(&id)?;
    state
        .story_service
        .delete_story(id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Advisory word budget per beat of a stored story
pub async fn story_pacing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PacingQuery>,
) -> Result<Json<HashMap<PlotBeatId, u32>>, (StatusCode, String)> {
    let id = parse_story_id(&id)?;
    state
        .story_service
        .pacing_for_story(id, query.target_word_count)
        .await
        .map(Json)
        .map_err(error_response)
}
