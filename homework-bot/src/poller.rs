//! Status poller: fetch, validate, derive, compare, notify, sleep.
//!
//! All per-process state (timestamp cursor, last notified status, last reported failure) lives in
//! [`Poller`]; the loop owns it, so nothing needs locking.

use hwbot_core::{Bot, Chat, HwbotError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::homework::{check_response, current_date, parse_status};
use crate::practicum::HomeworkApi;

/// Pause between two poll cycles, applied after every cycle including failed ones.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// What a single poll cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status was sent to the chat.
    Notified,
    /// The first homework's status matches the last one sent.
    Unchanged,
    /// The response carried no homeworks.
    NoHomeworks,
    Failed,
}

pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    bot: Arc<dyn Bot>,
    chat: Chat,
    /// `from_date` for the next fetch.
    timestamp: i64,
    last_status: Option<String>,
    last_error: Option<String>,
}

impl Poller {
    pub fn new(api: Arc<dyn HomeworkApi>, bot: Arc<dyn Bot>, chat: Chat, from_date: i64) -> Self {
        Self {
            api,
            bot,
            chat,
            timestamp: from_date,
            last_status: None,
            last_error: None,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Last message successfully delivered to the chat.
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    /// Last failure text reported to the chat, cleared by the next successful cycle.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Sends `message` to the configured chat. Any send failure becomes [`HwbotError::Notification`].
    pub async fn notify(&self, message: &str) -> Result<()> {
        debug!(chat_id = self.chat.id, "Sending message to chat");
        self.bot
            .send_message(&self.chat, message)
            .await
            .map_err(|e| match e {
                HwbotError::Notification(_) => e,
                other => HwbotError::Notification(other.to_string()),
            })?;
        debug!(chat_id = self.chat.id, "Message sent");
        Ok(())
    }

    /// Runs one cycle and handles its failure. Never returns an error.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        match self.check_updates().await {
            Ok(outcome) => {
                self.last_error = None;
                outcome
            }
            Err(e) if e.is_notification() => {
                // The chat is the broken part; reporting there would fail the same way.
                error!(error = %e, "Failed to deliver status update");
                CycleOutcome::Failed
            }
            Err(e) => {
                self.report_failure(&e).await;
                CycleOutcome::Failed
            }
        }
    }

    /// Polls forever, sleeping [`RETRY_PERIOD`] after each cycle.
    pub async fn run(&mut self) {
        info!(
            chat_id = self.chat.id,
            from_date = self.timestamp,
            retry_period_secs = RETRY_PERIOD.as_secs(),
            "Status poller started"
        );
        loop {
            let outcome = self.poll_once().await;
            debug!(?outcome, next_from_date = self.timestamp, "Poll cycle finished");
            tokio::time::sleep(RETRY_PERIOD).await;
        }
    }

    async fn check_updates(&mut self) -> Result<CycleOutcome> {
        let response = self.api.fetch(self.timestamp).await?;
        let homeworks = check_response(&response)?;
        let next_timestamp = current_date(&response).unwrap_or(self.timestamp);

        let outcome = match homeworks.first() {
            None => {
                debug!("No homework updates");
                CycleOutcome::NoHomeworks
            }
            Some(homework) => {
                let message = parse_status(homework)?;
                if self.last_status.as_deref() == Some(message.as_str()) {
                    debug!("Homework status unchanged");
                    CycleOutcome::Unchanged
                } else {
                    self.notify(&message).await?;
                    info!(message = %message, "Homework status change sent");
                    self.last_status = Some(message);
                    CycleOutcome::Notified
                }
            }
        };

        // Only move past updates that were actually handled.
        self.timestamp = next_timestamp;
        Ok(outcome)
    }

    async fn report_failure(&mut self, e: &HwbotError) {
        error!(error = %e, "Poll cycle failed");
        let message = format!("{}: {}", FAILURE_PREFIX, e);
        if self.last_error.as_deref() == Some(message.as_str()) {
            debug!("Failure already reported, not repeating");
            return;
        }
        self.last_error = Some(message.clone());
        if let Err(send_err) = self.notify(&message).await {
            warn!(error = %send_err, "Could not report failure to chat");
        }
    }
}
