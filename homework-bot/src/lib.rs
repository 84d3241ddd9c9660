//! # Homework status bot
//!
//! Polls the Practicum homework status API every [`RETRY_PERIOD`] and reports review verdict
//! changes to a Telegram chat. Transport, errors and tracing come from hwbot-core.

pub mod cli;
pub mod config;
pub mod homework;
pub mod poller;
pub mod practicum;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, PracticumConfig, TelegramConfig};
pub use homework::{check_response, current_date, parse_status, HomeworkStatus};
pub use poller::{CycleOutcome, Poller, RETRY_PERIOD};
pub use practicum::{HomeworkApi, PracticumClient};
pub use runner::{build_telegram_bot, check_once, run_bot, run_check, start_polling, STARTUP_MESSAGE};

pub use hwbot_core::{Bot, Chat, HwbotError, Result};
