//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use crate::application::errors::ConfigError;
use crate::application::services::ConversionSettings;
use crate::domain::entities::{BotIdentity, Bridge, MemberId};
use crate::infrastructure::adapters::discord::{DiscordTarget, MemberDirectory};

/// Bridge configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub bridges: Vec<Bridge>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    /// Id of the bridge's own Telegram bot
    pub bot_id: Option<i64>,
    #[serde(default)]
    pub use_first_name_instead_of_username: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordConfig {
    /// Display name -> member id
    #[serde(default)]
    pub members: BTreeMap<String, MemberId>,
}

impl Config {
    /// Configuration written by `init-config`
    pub fn sample() -> Self {
        Self {
            telegram: TelegramConfig {
                bot_id: Some(123456789),
                use_first_name_instead_of_username: false,
            },
            discord: DiscordConfig::default(),
            bridges: vec![Bridge::new("default", -1001234567890, 123456789012345678)],
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Some(bot_id) = std::env::var("TG_BOT_ID").ok().and_then(|id| id.parse().ok()) {
            config.telegram.bot_id = Some(bot_id);
        }

        if let Ok(flag) = std::env::var("TG_USE_FIRST_NAME") {
            config.telegram.use_first_name_instead_of_username = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// Bridge names must be non-empty and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for bridge in &self.bridges {
            if bridge.name.is_empty() {
                return Err(ConfigError::InvalidValue("bridge name must not be empty".to_string()));
            }
            if !seen.insert(bridge.name.as_str()) {
                return Err(ConfigError::InvalidValue(format!("duplicate bridge name: {}", bridge.name)));
            }
        }
        Ok(())
    }

    pub fn settings(&self) -> ConversionSettings {
        ConversionSettings {
            prefer_first_name: self.telegram.use_first_name_instead_of_username,
        }
    }

    pub fn bot_identity(&self) -> Result<BotIdentity, ConfigError> {
        self.telegram
            .bot_id
            .map(BotIdentity::new)
            .ok_or_else(|| ConfigError::MissingField("telegram.bot-id".to_string()))
    }

    /// Look up a bridge by name, or the first configured bridge
    pub fn bridge(&self, name: Option<&str>) -> Result<&Bridge, ConfigError> {
        match name {
            Some(name) => self
                .bridges
                .iter()
                .find(|bridge| bridge.name == name)
                .ok_or_else(|| ConfigError::InvalidValue(format!("unknown bridge: {}", name))),
            None => self
                .bridges
                .first()
                .ok_or_else(|| ConfigError::MissingField("bridges".to_string())),
        }
    }

    pub fn discord_target(&self) -> DiscordTarget {
        let members: MemberDirectory = self
            .discord
            .members
            .iter()
            .map(|(name, id)| (name.clone(), *id))
            .collect();
        DiscordTarget::new(members)
    }
}
