//! Error types for the homework bot.
//!
//! [`HwbotError`] covers startup configuration, the homework API, response shape checks and
//! chat notifications. The poller treats [`HwbotError::Notification`] differently from the rest,
//! so a failing chat never reports its own failure back to itself.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HwbotError {
    #[error("Config error: {0}")]
    Config(String),

    /// Homework API unreachable, non-200 reply or unreadable body.
    #[error("API unavailable: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Notification failed: {0}")]
    Notification(String),
}

impl HwbotError {
    /// True for chat send failures.
    pub fn is_notification(&self) -> bool {
        matches!(self, HwbotError::Notification(_))
    }
}

/// Result type for core operations; uses [`HwbotError`].
pub type Result<T> = std::result::Result<T, HwbotError>;
