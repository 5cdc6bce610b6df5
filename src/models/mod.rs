// src/models/mod.rs

//! Domain models for the bot.

mod config;
mod homework;

// Re-export all public types
pub use config::{ApiConfig, Config, Credentials, PollConfig, TelegramConfig};
pub use homework::HomeworkStatus;
