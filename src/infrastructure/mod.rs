//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Telegram payloads, Discord rendering)

pub mod adapters;
pub mod config;
