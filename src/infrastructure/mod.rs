//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - AI providers: reqwest clients for the text generation backends
//! - Persistence: SQLite storage for stories and AI settings
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod ai_providers;
pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
