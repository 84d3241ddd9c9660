//! Wiring: config → tracing → Telegram bot + Practicum client → poller.

use anyhow::{Context, Result};
use hwbot_core::{init_tracing, Bot, Chat, TelegramBot};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::{BotConfig, PracticumConfig};
use crate::homework::{check_response, parse_status};
use crate::poller::Poller;
use crate::practicum::{HomeworkApi, PracticumClient};

pub const STARTUP_MESSAGE: &str = "Бот отслеживания домашних работ активирован";

/// Builds the Telegram transport from config, honoring TELEGRAM_API_URL.
pub fn build_telegram_bot(config: &BotConfig) -> Result<TelegramBot> {
    let bot = TelegramBot::new(config.telegram.bot_token.clone());
    match config.telegram.api_url {
        Some(ref url) => Ok(bot.with_api_url(url)?),
        None => Ok(bot),
    }
}

/// Main entry: validate config, init logging, announce startup, then poll forever.
/// `from_date` defaults to the current time.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, from_date: Option<i64>) -> Result<()> {
    config.validate()?;
    if let Some(dir) = Path::new(config.log_file()).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
    }
    init_tracing(config.log_file())?;

    let api: Arc<dyn HomeworkApi> = Arc::new(PracticumClient::new(&config.practicum)?);
    let bot: Arc<dyn Bot> = Arc::new(build_telegram_bot(&config)?);
    let chat = config.telegram.chat();
    let from_date = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());

    info!(
        endpoint = %config.practicum.endpoint,
        chat_id = chat.id,
        from_date,
        "Initializing bot"
    );

    start_polling(api, bot, chat, from_date).await;
    Ok(())
}

/// Announces startup in the chat, then polls forever. A failed announcement is only logged.
#[instrument(skip(api, bot))]
pub async fn start_polling(
    api: Arc<dyn HomeworkApi>,
    bot: Arc<dyn Bot>,
    chat: Chat,
    from_date: i64,
) {
    let mut poller = Poller::new(api, bot, chat, from_date);
    if let Err(e) = poller.notify(STARTUP_MESSAGE).await {
        warn!(error = %e, "Startup message not delivered");
    }

    poller.run().await;
}

/// Single fetch → validate → derive without touching the chat. Returns the message for the first
/// homework, or None when there are no updates since `from_date`.
#[instrument(skip(api))]
pub async fn check_once(api: &dyn HomeworkApi, from_date: i64) -> Result<Option<String>> {
    let response = api.fetch(from_date).await?;
    let homeworks = check_response(&response)?;
    match homeworks.first() {
        Some(homework) => Ok(Some(parse_status(homework)?)),
        None => Ok(None),
    }
}

/// `check` command: builds the client from Practicum config and runs [`check_once`].
pub async fn run_check(config: PracticumConfig, from_date: i64) -> Result<Option<String>> {
    config.validate()?;
    let client = PracticumClient::new(&config)?;
    check_once(&client, from_date)
        .await
        .context("Homework status check failed")
}
