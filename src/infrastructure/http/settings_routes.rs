use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::domain::value_objects::AiProviderConfig;
use crate::infrastructure::state::AppState;

#[derive(Debug, Serialize)]
pub struct AiSettingsResponse {
    /// Settings saved by the user, if any
    pub settings: Option<AiProviderConfig>,
    /// Provider that generation requests will use
    pub active_provider: Option<&'static str>,
}

async fn current(state: &AppState) -> AiSettingsResponse {
    AiSettingsResponse {
        settings: state.ai_settings_service.get().await,
        active_provider: state
            .ai_settings_service
            .resolve()
            .await
            .map(|config| config.provider_name()),
    }
}

pub async fn get_ai_settings(State(state): State<Arc<AppState>>) -> Json<AiSettingsResponse> {
    Json(current(&state).await)
}

pub async fn update_ai_settings(
    State(state): State<Arc<AppState>>,
    Json(config): Json<AiProviderConfig>,
) -> Result<Json<AiSettingsResponse>, (StatusCode, String)> {
    state
        .ai_settings_service
        .update(config)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(current(&state).await))
}

pub async fn reset_ai_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AiSettingsResponse>, (StatusCode, String)> {
    state
        .ai_settings_service
        .reset()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(current(&state).await))
}
