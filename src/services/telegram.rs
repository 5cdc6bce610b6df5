// src/services/telegram.rs

//! Telegram delivery for status notifications.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::TelegramConfig;

/// Client for sending messages through the Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramBot {
    /// Create a new bot client for the configured chat.
    pub fn new(config: &TelegramConfig, token: String, chat_id: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            token,
            chat_id,
        })
    }

    /// Send a text message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Telegram(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Telegram(e.to_string()))?;
        Ok(())
    }

    /// Deliver a notification, absorbing any failure into a log line.
    pub async fn notify(&self, text: &str) {
        log::info!("Sending notification to chat {}", self.chat_id);
        match self.send_message(text).await {
            Ok(()) => log::info!("Notification delivered: {text}"),
            Err(error) => log::error!("Failed to deliver notification {text:?}: {error}"),
        }
    }
}
