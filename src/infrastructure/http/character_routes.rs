//! Character development helpers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Character, Theme};
use crate::domain::services::generate_dialogue_prompts;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CharacterArcRequest {
    pub character: Character,
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct CharacterArcResponse {
    pub stages: Vec<String>,
}

pub async fn character_arc(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CharacterArcRequest>,
) -> Json<CharacterArcResponse> {
    Json(CharacterArcResponse {
        stages: state.story_service.character_arc(&req.character, &req.theme),
    })
}

pub async fn dialogue_prompts(Json(character): Json<Character>) -> Json<Vec<String>> {
    Json(generate_dialogue_prompts(&character))
}
