//! StoryWeaver Engine - Backend API for story builders
//!
//! The Engine is the backend server that:
//! - Generates story outlines from characters, settings, and themes
//! - Drafts chapter prose with a rule-based engine
//! - Delegates chapter drafting to an AI provider when one is configured
//! - Stores generated stories and AI settings in SQLite

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyweaver_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StoryWeaver Engine");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Database: {}", config.database_url);
    match &config.ai_provider {
        Some(provider) => tracing::info!("  AI provider: {}", provider.provider_name()),
        None => tracing::info!("  AI provider: none (rule-based generation)"),
    }

    let state = Arc::new(AppState::new(config).await?);
    tracing::info!("Application state initialized");

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server_port));
    let shutdown = state.clone();
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(http::create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C, then stop in-flight generations at their next chapter boundary
async fn shutdown_signal(state: Arc<AppState>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, cancelling in-flight generations");
    state.shutdown.cancel();
}

async fn health_check() -> &'static str {
    "OK"
}
