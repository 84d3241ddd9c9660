//! Chat side config. Loaded from env: TELEGRAM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use hwbot_core::{Chat, HwbotError, Result};

use super::{optional_var, required_var};

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// TELEGRAM_TOKEN
    pub bot_token: String,
    /// TELEGRAM_CHAT_ID
    pub chat_id: i64,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub api_url: Option<String>,
}

impl TelegramConfig {
    /// `token` overrides TELEGRAM_TOKEN if provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => required_var("TELEGRAM_TOKEN")?,
        };
        let raw_chat_id = required_var("TELEGRAM_CHAT_ID")?;
        let chat_id = raw_chat_id.trim().parse::<i64>().map_err(|_| {
            HwbotError::Config(format!("TELEGRAM_CHAT_ID is not an integer: {}", raw_chat_id))
        })?;
        let api_url = optional_var("TELEGRAM_API_URL").or_else(|| optional_var("TELOXIDE_API_URL"));
        Ok(Self {
            bot_token,
            chat_id,
            api_url,
        })
    }

    pub fn chat(&self) -> Chat {
        Chat::new(self.chat_id)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(HwbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }
}
