//! HTTP REST API routes

mod character_routes;
mod settings_routes;
mod story_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Outline routes
        .route("/api/outlines", post(story_routes::create_outline))
        .route("/api/outlines/pacing", post(story_routes::outline_pacing))
        .route("/api/outlines/draft", post(story_routes::draft_outline))
        .route("/api/outlines/prose", post(story_routes::outline_prose))
        .route("/api/outlines/chapter", post(story_routes::draft_chapter))
        // Story routes
        .route(
            "/api/stories",
            get(story_routes::list_stories).post(story_routes::create_story),
        )
        .route(
            "/api/stories/{id}",
            get(story_routes::get_story).delete(story_routes::delete_story),
        )
        .route("/api/stories/{id}/pacing", get(story_routes::story_pacing))
        // Character routes
        .route("/api/characters/arc", post(character_routes::character_arc))
        .route(
            "/api/characters/dialogue-prompts",
            post(character_routes::dialogue_prompts),
        )
        // AI settings routes
        .route(
            "/api/settings/ai",
            get(settings_routes::get_ai_settings).put(settings_routes::update_ai_settings),
        )
        .route(
            "/api/settings/ai/reset",
            post(settings_routes::reset_ai_settings),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    async fn app() -> Router {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let state = AppState::with_pool(config, pool).await.unwrap();
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    fn story_request() -> Value {
        json!({
            "characters": [
                {"name": "Aria", "role": "protagonist", "personality_traits": ["brave"]},
                {"name": "Malachar", "role": "antagonist"}
            ],
            "settings": [
                {"name": "Whispering Woods", "genre": "fantasy", "type": "forest", "time_of_day": "night"}
            ],
            "themes": [{"primary": "redemption"}],
            "options": {"length": "short"}
        })
    }

    #[tokio::test]
    async fn test_create_outline() {
        let app = app().await;
        let (status, outline) = send(&app, "POST", "/api/outlines", Some(story_request())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(outline["plot_points"].as_array().unwrap().len(), 8);
        assert_eq!(outline["genre"], "fantasy");
        assert_eq!(outline["chapter_titles"][0], "Chapter 1: Opening Scene");
        assert_eq!(outline["chapter_titles"][7], "Chapter 8: Resolution");
    }

    #[tokio::test]
    async fn test_draft_outline_without_storing() {
        let app = app().await;
        let (_, outline) = send(&app, "POST", "/api/outlines", Some(story_request())).await;

        let (status, drafted) = send(
            &app,
            "POST",
            "/api/outlines/draft",
            Some(json!({"outline": outline, "options": {"include_dialogue": false}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(drafted["is_complete"], true);
        assert_eq!(drafted["chapters"].as_array().unwrap().len(), 8);
        assert!(drafted["reading_time"].as_u64().unwrap() >= 1);
        assert!(drafted["content"]
            .as_str()
            .unwrap()
            .starts_with(&format!("# {}", outline["title"].as_str().unwrap())));

        let (_, listed) = send(&app, "GET", "/api/stories", None).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_outline_prose_is_markdown() {
        let app = app().await;
        let (_, outline) = send(&app, "POST", "/api/outlines", Some(story_request())).await;

        let (status, document) = send(
            &app,
            "POST",
            "/api/outlines/prose",
            Some(json!({"outline": outline})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let document = document.as_str().unwrap();
        assert!(document.starts_with("# "));
        assert!(document.contains("## Chapter 1: Opening Scene"));
        assert!(document.contains("## Chapter 8: Resolution"));

        let (status, chapter) = send(
            &app,
            "POST",
            "/api/outlines/chapter",
            Some(json!({"outline": outline, "chapter": 4})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(chapter.as_str().unwrap().starts_with("## Chapter 4: First Obstacle"));

        let (status, _) = send(
            &app,
            "POST",
            "/api/outlines/chapter",
            Some(json!({"outline": outline, "chapter": 12})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_outline_without_themes_is_a_bad_request() {
        let app = app().await;
        let mut request = story_request();
        request["themes"] = json!([]);

        let (status, _) = send(&app, "POST", "/api/outlines", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pacing_covers_every_beat() {
        let app = app().await;
        let (_, outline) = send(&app, "POST", "/api/outlines", Some(story_request())).await;

        let (status, pacing) = send(
            &app,
            "POST",
            "/api/outlines/pacing",
            Some(json!({"outline": outline, "target_word_count": 10000})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let pacing = pacing.as_object().unwrap();
        assert_eq!(pacing.len(), 8);
        let total: u64 = pacing.values().map(|v| v.as_u64().unwrap()).sum();
        assert!(total <= 10000 && total >= 10000 - 8);
    }

    #[tokio::test]
    async fn test_story_lifecycle() {
        let app = app().await;

        let (status, story) = send(&app, "POST", "/api/stories", Some(story_request())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(story["is_complete"], true);
        assert_eq!(story["chapters"].as_array().unwrap().len(), 8);
        let id = story["id"].as_str().unwrap().to_string();

        let (status, listed) = send(&app, "GET", "/api/stories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, fetched) = send(&app, "GET", &format!("/api/stories/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["content"], story["content"]);

        let (status, pacing) = send(
            &app,
            "GET",
            &format!("/api/stories/{}/pacing?target_word_count=4000", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pacing.as_object().unwrap().len(), 8);

        let (status, _) = send(&app, "DELETE", &format!("/api/stories/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &format!("/api/stories/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &format!("/api/stories/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_story_id_is_a_bad_request() {
        let app = app().await;
        let (status, _) = send(&app, "GET", "/api/stories/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_character_helpers() {
        let app = app().await;
        let aria = json!({
            "name": "Aria",
            "role": "protagonist",
            "personality_traits": ["brave", "kind"],
            "goals": ["find her lost brother"],
            "flaws": ["trusts too easily"]
        });

        let (status, arc) = send(
            &app,
            "POST",
            "/api/characters/arc",
            Some(json!({"character": aria, "theme": {"primary": "friendship"}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let stages = arc["stages"].as_array().unwrap();
        assert_eq!(stages.len(), 5);
        assert_eq!(stages[0], "Aria begins as someone who trusts too easily");

        let (status, prompts) = send(&app, "POST", "/api/characters/dialogue-prompts", Some(aria)).await;
        assert_eq!(status, StatusCode::OK);
        let prompts = prompts.as_array().unwrap();
        assert!(prompts.len() >= 2);
        assert!(prompts.iter().all(|p| p.as_str().unwrap().contains("Aria")));
    }

    #[tokio::test]
    async fn test_ai_settings_update_and_reset() {
        let app = app().await;

        let (status, settings) = send(&app, "GET", "/api/settings/ai", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(settings["settings"], Value::Null);
        assert_eq!(settings["active_provider"], Value::Null);

        let (status, settings) = send(
            &app,
            "PUT",
            "/api/settings/ai",
            Some(json!({"provider": "local", "model": "mistral"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(settings["settings"]["provider"], "local");
        assert_eq!(settings["active_provider"], "local");

        let (status, settings) = send(&app, "POST", "/api/settings/ai/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(settings["settings"], Value::Null);
    }

    #[tokio::test]
    async fn test_remote_provider_without_key_is_saved_but_inactive() {
        let app = app().await;
        let (status, settings) = send(
            &app,
            "PUT",
            "/api/settings/ai",
            Some(json!({"provider": "openai"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(settings["settings"]["provider"], "openai");
        assert_eq!(settings["active_provider"], Value::Null);
    }
}
