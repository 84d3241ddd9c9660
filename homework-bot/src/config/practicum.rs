//! Homework API config. Loaded from env: PRACTICUM_TOKEN, PRACTICUM_ENDPOINT.

use hwbot_core::{HwbotError, Result};

use super::{optional_var, required_var};

/// Homework status endpoint used when PRACTICUM_ENDPOINT is not set.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Clone)]
pub struct PracticumConfig {
    /// PRACTICUM_TOKEN, sent as `Authorization: OAuth <token>`
    pub token: String,
    /// PRACTICUM_ENDPOINT
    pub endpoint: String,
}

impl PracticumConfig {
    pub fn from_env() -> Result<Self> {
        let token = required_var("PRACTICUM_TOKEN")?;
        let endpoint = optional_var("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self { token, endpoint })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.endpoint).is_err() {
            return Err(HwbotError::Config(format!(
                "PRACTICUM_ENDPOINT is not a valid URL: {}",
                self.endpoint
            )));
        }
        Ok(())
    }
}
