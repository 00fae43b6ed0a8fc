use serde::{Deserialize, Serialize};
use std::fmt;

/// The bridge bot's own identity on Telegram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotIdentity {
    pub id: i64,
}

impl BotIdentity {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// A Discord member id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Native Discord mention token, e.g. `<@42>`
    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One Telegram chat <-> Discord channel pairing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bridge {
    pub name: String,
    pub telegram_chat_id: i64,
    pub discord_channel_id: u64,
}

impl Bridge {
    pub fn new(name: impl Into<String>, telegram_chat_id: i64, discord_channel_id: u64) -> Self {
        Self {
            name: name.into(),
            telegram_chat_id,
            discord_channel_id,
        }
    }
}
