//! Error types for the Telegram bot.

use dailynewzz_core::{ConfigError, NewsError};
use thiserror::Error;

/// Errors that stop the bot from starting.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Required configuration missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The headlines client could not be created.
    #[error("News client error: {0}")]
    NewsClient(#[from] NewsError),

    /// Failed to reach Telegram at startup.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// Could not load an explicitly requested env file.
    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Result type for Telegram operations.
pub type Result<T> = std::result::Result<T, TelegramError>;
