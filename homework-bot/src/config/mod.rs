//! Bot configuration: PracticumConfig (homework API) + TelegramConfig (chat side) + log file.

mod bot_config;
mod practicum;
mod telegram;

#[cfg(test)]
mod tests;

pub use bot_config::BotConfig;
pub use practicum::{PracticumConfig, DEFAULT_ENDPOINT};
pub use telegram::TelegramConfig;

use hwbot_core::{HwbotError, Result};
use std::env;

/// Reads a required variable. Unset, empty and whitespace-only values all count as missing.
pub(crate) fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(HwbotError::Config(format!("{} not set", name))),
    }
}

/// Reads an optional variable; empty counts as unset.
pub(crate) fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
