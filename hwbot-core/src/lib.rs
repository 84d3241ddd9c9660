//! # hwbot-core
//!
//! Core pieces of the homework status bot: the [`Bot`] trait and its Telegram implementation,
//! the [`Chat`] target, the [`HwbotError`] enum, and tracing initialization.
//! Transport-agnostic apart from [`TelegramBot`]; used by homework-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use error::{HwbotError, Result};
pub use logger::init_tracing;
pub use types::Chat;
