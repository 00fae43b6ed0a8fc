//! Platform adapters

pub mod discord;
pub mod telegram;
