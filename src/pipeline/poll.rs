// src/pipeline/poll.rs

//! The polling loop.
//!
//! Drives fetch → validate → parse → notify cycles forever, sleeping a fixed
//! interval between them. Every error raised by a cycle is caught here,
//! logged, and relayed to the chat unless it repeats the previous one.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Config, Credentials};
use crate::pipeline::status::parse_status;
use crate::pipeline::validate::check_response;
use crate::services::{HomeworkApi, TelegramBot};

/// Mutable loop state: the `from_date` cursor and error dedup memory.
#[derive(Debug)]
struct PollState {
    cursor: i64,
    last_error: Option<String>,
}

impl PollState {
    fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_error: None,
        }
    }

    /// Advance the cursor from a response's `current_date`, if present.
    fn advance(&mut self, response: &Value) {
        if let Some(ts) = response.get("current_date").and_then(Value::as_i64) {
            self.cursor = ts;
        }
    }

    /// Record an error message; returns whether it should be notified.
    ///
    /// Consecutive cycles failing with identical text notify only once.
    fn note_error(&mut self, message: &str) -> bool {
        if self.last_error.as_deref() == Some(message) {
            return false;
        }
        self.last_error = Some(message.to_string());
        true
    }
}

/// The poller tying the API client, validation, and the notifier together.
pub struct Poller {
    api: HomeworkApi,
    bot: TelegramBot,
    interval: Duration,
}

impl Poller {
    /// Build a poller from configuration and credentials.
    pub fn new(config: &Config, credentials: &Credentials) -> Result<Self> {
        let api = HomeworkApi::new(&config.api, credentials.practicum_token.clone())?;
        let bot = TelegramBot::new(
            &config.telegram,
            credentials.telegram_token.clone(),
            credentials.telegram_chat_id.clone(),
        )?;

        Ok(Self {
            api,
            bot,
            interval: Duration::from_secs(config.poll.interval_secs),
        })
    }

    /// Run the polling loop forever.
    pub async fn run(&self) {
        let mut state = PollState::new(Utc::now().timestamp());
        log::info!(
            "Polling every {}s starting from cursor {}",
            self.interval.as_secs(),
            state.cursor
        );

        loop {
            self.run_cycle(&mut state).await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Execute a single cycle and return.
    pub async fn run_once(&self) {
        let mut state = PollState::new(Utc::now().timestamp());
        self.run_cycle(&mut state).await;
    }

    /// One fetch → validate → parse → notify cycle. Never propagates errors.
    async fn run_cycle(&self, state: &mut PollState) {
        match self.poll(state).await {
            Ok(Some(message)) => self.bot.notify(&message).await,
            Ok(None) => log::debug!("No new homework statuses in response"),
            Err(error) => {
                let message = format!("Polling cycle failed: {error}");
                log::error!("{message}");
                if state.note_error(&message) {
                    self.bot.notify(&message).await;
                } else {
                    log::debug!("Suppressed duplicate error notification");
                }
            }
        }
    }

    /// Fetch one response, advance the cursor, and process it.
    ///
    /// The cursor advances before validation, so a response that later turns
    /// out malformed still moves the window forward.
    async fn poll(&self, state: &mut PollState) -> Result<Option<String>> {
        let response = self.api.fetch(state.cursor).await?;
        state.advance(&response);
        process_response(&response)
    }
}

/// Validate a response and format the first homework's status message.
///
/// Only the first record is processed per cycle; later entries are picked up
/// once the cursor has advanced past them.
fn process_response(response: &Value) -> Result<Option<String>> {
    let homeworks = check_response(response)?;

    match homeworks.first() {
        Some(record) => {
            if homeworks.len() > 1 {
                log::debug!(
                    "{} further homework records deferred to the next cycle",
                    homeworks.len() - 1
                );
            }
            Ok(Some(parse_status(record)?))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::AppError;

    #[test]
    fn approved_homework_formats_message_and_advances_cursor() {
        let mut state = PollState::new(0);
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        });

        state.advance(&response);
        let message = process_response(&response).unwrap().unwrap();

        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(state.cursor, 1000);
    }

    #[test]
    fn empty_homework_list_produces_no_message() {
        let mut state = PollState::new(0);
        let response = json!({"homeworks": [], "current_date": 1000});

        state.advance(&response);
        assert_eq!(process_response(&response).unwrap(), None);
        assert_eq!(state.cursor, 1000);
    }

    #[test]
    fn undocumented_status_is_an_error() {
        let response = json!({
            "homeworks": [{"homework_name": "hw2", "status": "in_review"}],
            "current_date": 1000
        });
        assert!(matches!(
            process_response(&response),
            Err(AppError::UndocumentedStatus(_))
        ));
    }

    #[test]
    fn only_the_first_record_is_processed() {
        let response = json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "rejected"},
                {"homework_name": "hw2", "status": "approved"}
            ],
            "current_date": 1000
        });
        let message = process_response(&response).unwrap().unwrap();
        assert!(message.contains("hw1"));
        assert!(!message.contains("hw2"));
    }

    #[test]
    fn cursor_is_kept_when_current_date_is_absent() {
        let mut state = PollState::new(42);
        let response = json!({"homeworks": []});

        state.advance(&response);
        assert_eq!(state.cursor, 42);
        assert!(matches!(
            process_response(&response),
            Err(AppError::MissingResponseKeys)
        ));
    }

    #[test]
    fn cursor_is_kept_when_current_date_is_not_an_integer() {
        let mut state = PollState::new(42);
        let response = json!({"homeworks": [], "current_date": "soon"});

        state.advance(&response);
        assert_eq!(state.cursor, 42);
    }

    #[test]
    fn identical_consecutive_errors_notify_once() {
        let mut state = PollState::new(0);
        assert!(state.note_error("Polling cycle failed: boom"));
        assert!(!state.note_error("Polling cycle failed: boom"));
        assert!(state.note_error("Polling cycle failed: other"));
        assert!(!state.note_error("Polling cycle failed: other"));
    }

    #[test]
    fn status_code_appears_in_error_text() {
        let message = format!("Polling cycle failed: {}", AppError::UnexpectedStatus(503));
        assert!(message.contains("503"));
    }
}
