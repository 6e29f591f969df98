//! DailyNewzz Telegram Bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx NEWS_API_KEY=yyy cargo run -p dailynewzz-telegram
//! ```

use std::path::PathBuf;

use clap::Parser;
use dailynewzz_core::{config, BotConfig};
use dailynewzz_telegram::{TelegramBot, TelegramError};
use tracing_subscriber::EnvFilter;

/// DailyNewzz Bot - top headlines for your favourite genre
#[derive(Parser, Debug)]
#[command(name = "dailynewzz-telegram")]
#[command(about = "Telegram bot that delivers top headlines for a chosen news genre")]
struct Args {
    /// Load environment variables from this file instead of the defaults
    #[arg(long, env = "DAILYNEWZZ_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_env(args: &Args) -> Result<(), TelegramError> {
    if let Some(path) = &args.env_file {
        return dotenvy::from_path(path)
            .map(|_| ())
            .map_err(|e| TelegramError::EnvFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            });
    }

    // Load environment variables from config directory first
    let env_path = config::env_file();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    }
    // Then local .env.local or .env
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "dailynewzz_telegram=info,dailynewzz_core=info,teloxide=warn",
        1 => "dailynewzz_telegram=debug,dailynewzz_core=debug,teloxide=info",
        2 => "dailynewzz_telegram=trace,dailynewzz_core=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    load_env(&args)?;

    // Missing credentials end the process before any update is handled.
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(TelegramError::from(e).into());
        }
    };
    tracing::debug!(config = ?config, "Configuration loaded");

    let bot = TelegramBot::new(&config)?;

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\n[news] DailyNewzz Telegram Bot");
            println!("   Bot: @{}", username);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            return Err(e.into());
        }
    }

    println!("\n[chat] Open a private chat with the bot and say 'hi' to begin");
    println!("   Press Ctrl+C to stop\n");

    bot.start_polling().await?;

    Ok(())
}
