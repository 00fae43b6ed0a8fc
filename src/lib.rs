//! Telegram to Discord message conversion core

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::errors::{BridgeError, ConfigError, ParseError};
pub use application::services::{ConversionSettings, MessageConverter};
pub use domain::entities::{BotIdentity, Bridge, ConversionResult, InboundMessage};
