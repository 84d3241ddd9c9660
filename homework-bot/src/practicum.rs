//! Practicum homework status API client.
//!
//! [`HomeworkApi`] is the fetch seam the poller depends on; [`PracticumClient`] implements it with
//! reqwest. Every failure (connect, timeout, non-200, unreadable JSON) is reported as
//! [`HwbotError::Transport`] so the poller can tell an unavailable API from a bad payload.

use async_trait::async_trait;
use hwbot_core::{HwbotError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::PracticumConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of homework status snapshots.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Returns the raw response body for homeworks updated since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &PracticumConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HwbotError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.endpoint, "Homework API request failed");
                HwbotError::Transport(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, endpoint = %self.endpoint, "Homework API endpoint unavailable");
            return Err(HwbotError::Transport(format!(
                "endpoint {} returned {}",
                self.endpoint, status
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HwbotError::Transport(format!("invalid JSON body: {}", e)))
    }
}
