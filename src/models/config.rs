//! Application configuration structures.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Homework API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Polling behavior settings
    #[serde(default)]
    pub poll: PollConfig,

    /// Telegram transport settings
    #[serde(default)]
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(AppError::config("api.endpoint is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::config("api.timeout_secs must be > 0"));
        }
        if self.poll.interval_secs == 0 {
            return Err(AppError::config("poll.interval_secs must be > 0"));
        }
        if self.telegram.api_base.trim().is_empty() {
            return Err(AppError::config("telegram.api_base is empty"));
        }
        if self.telegram.timeout_secs == 0 {
            return Err(AppError::config("telegram.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Homework API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Homework status endpoint URL
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Polling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between polling cycles in seconds
    #[serde(default = "defaults::interval")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: defaults::interval(),
        }
    }
}

/// Telegram transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Base URL of the Telegram Bot API
    #[serde(default = "defaults::api_base")]
    pub api_base: String,

    /// Delivery timeout in seconds
    #[serde(default = "defaults::telegram_timeout")]
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: defaults::api_base(),
            timeout_secs: defaults::telegram_timeout(),
        }
    }
}

/// Secrets read from the environment, never from the config file.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the homework API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination chat identifier
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read all required credentials from the environment.
    ///
    /// Any missing variable is fatal; the caller aborts startup.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: require("PRACTICUM_TOKEN")?,
            telegram_token: require("TELEGRAM_TOKEN")?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID")?,
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::MissingEnv(name)),
    }
}

mod defaults {
    pub fn endpoint() -> String {
        "https://practicum.yandex.ru/api/user_api/homework_statuses/".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn interval() -> u64 {
        600
    }
    pub fn api_base() -> String {
        "https://api.telegram.org".into()
    }
    pub fn telegram_timeout() -> u64 {
        10
    }
}
