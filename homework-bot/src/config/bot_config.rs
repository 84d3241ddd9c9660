//! BotConfig: PracticumConfig + TelegramConfig + log file. Use load() for env-based loading.

use hwbot_core::Result;

use super::{optional_var, PracticumConfig, TelegramConfig};

const DEFAULT_LOG_FILE: &str = "logs/homework-bot.log";

/// Full runtime config. Credentials are read once and never change afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub practicum: PracticumConfig,
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. If `token` is provided it overrides TELEGRAM_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let practicum = PracticumConfig::from_env()?;
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = optional_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            practicum,
            telegram,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.practicum.validate()?;
        self.telegram.validate()
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}
