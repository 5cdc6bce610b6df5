// src/error.rs

//! Unified error handling for the bot.

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction or other reqwest-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Required environment variable absent at startup
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Transport-level failure contacting the homework API
    #[error("homework API endpoint unreachable: {0}")]
    EndpointUnreachable(String),

    /// Homework API answered with a status other than 200
    #[error("homework API returned unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// Response body is not valid JSON
    #[error("homework API response is not valid JSON: {0}")]
    Decode(String),

    /// Top-level response value is not a JSON object
    #[error("homework API response is not a JSON object")]
    ResponseNotObject,

    /// `homeworks` or `current_date` absent from the response
    #[error("homework API response is missing the `homeworks` or `current_date` key")]
    MissingResponseKeys,

    /// `homeworks` present but not an array
    #[error("`homeworks` value in the API response is not a list")]
    HomeworkListInvalid,

    /// Homework record missing a required field
    #[error("homework record is missing the `{0}` field")]
    MissingField(&'static str),

    /// Homework status outside the documented set
    #[error("undocumented homework status `{0}` in the API response")]
    UndocumentedStatus(String),

    /// Telegram delivery failed
    #[error("Telegram API error: {0}")]
    Telegram(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
