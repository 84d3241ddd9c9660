//! Bot abstraction for sending notifications.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.

use crate::error::{HwbotError, Result};
use crate::types::Chat;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Bot`].
pub struct TelegramBot {
    bot: teloxide::Bot,
}

/// Parses a Bot API base URL. Used for TELEGRAM_API_URL overrides (local Bot API server, tests).
pub fn parse_api_url(s: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(s)
        .map_err(|e| HwbotError::Config(format!("Invalid Telegram API URL {}: {}", s, e)))
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Points the bot at a different Bot API server.
    pub fn with_api_url(self, url: &str) -> Result<Self> {
        let url = parse_api_url(url)?;
        Ok(Self {
            bot: self.bot.set_api_url(url),
        })
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| HwbotError::Notification(e.to_string()))?;
        Ok(())
    }
}
