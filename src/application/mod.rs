//! Application layer - Use cases orchestrating the domain
//!
//! - Ports: text generation, story storage, and persisted AI settings
//! - Services: story generation, AI delegation, AI settings

pub mod ports;
pub mod services;
