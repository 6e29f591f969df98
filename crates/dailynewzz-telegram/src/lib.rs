//! Telegram front end for DailyNewzz.
//!
//! Users open a private chat with the bot, say `hi`, pick a news genre from
//! the numbered list, and then ask for headlines with `/get_news`.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//! - `NEWS_API_KEY`: Key for the headlines endpoint
//!
//! Optional:
//! - `NEWS_API_URL`, `NEWS_COUNTRY`, `NEWS_TIMEOUT_SECS` (see `dailynewzz_core::config`)
//!
//! # Example
//!
//! ```no_run
//! use dailynewzz_core::BotConfig;
//! use dailynewzz_telegram::TelegramBot;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_env()?;
//!     let bot = TelegramBot::new(&config)?;
//!     bot.start_polling().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Commands
//!
//! - `hi` / `/start` - Start genre selection
//! - `/get_news` - Fetch headlines for the selected genre
//! - `/reset` - Forget the genre and choose again
//! - `/help` - Show available commands
//!
//! All of these work in private chats only.

pub mod bot;
pub mod error;
pub mod handlers;
pub mod state;

pub use bot::TelegramBot;
pub use error::{Result, TelegramError};
pub use handlers::{ChatReplies, Command};
pub use state::{create_shared_state, TelegramState};
