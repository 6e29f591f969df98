//! User-facing reply texts.

use crate::genre::{numbered_list, Genre};

/// Greeting that starts onboarding (compared case-insensitively).
pub const GREETING: &str = "hi";

pub const INVALID_SELECTION: &str =
    "❌ Invalid selection. Please choose a genre by number or name from the list provided.";

pub const DIRECT_MESSAGE_ONLY: &str = "❌ Please use this command in a direct message with the bot.";

pub const NO_GENRE_SELECTED: &str =
    "❌ You haven't selected a genre yet. Please say 'hi' to start the setup.";

pub const RESET_DONE: &str = "🔄 Your preferences have been reset.";

pub const NO_ARTICLES: &str =
    "❌ Sorry, I couldn't find any news articles for that genre at the moment.";

pub const FETCH_ERROR: &str = "❌ There was an error fetching the news. Please try again later.";

pub const SAY_HI: &str = "👋 Say 'hi' to choose a news genre.";

/// Catalog prompt sent when onboarding starts.
pub fn genre_prompt() -> String {
    format!(
        "👋 Hello! Welcome to DailyNewzz Bot.\n\
        Please choose a genre from the following list by typing the number or name:\n\n\
        {}",
        numbered_list()
    )
}

pub fn selection_confirmed(genre: Genre) -> String {
    format!(
        "✅ You have selected: {}.\nYou can now use /get_news to fetch the latest news.",
        genre
    )
}

pub fn already_selected(genre: Genre) -> String {
    format!(
        "You're already following {}. Use /get_news for headlines or /reset to pick another genre.",
        genre
    )
}

pub fn fetching(genre: Genre) -> String {
    format!("🔄 Fetching latest news for {}...", genre)
}

pub fn unknown_command(command: &str) -> String {
    format!("Unknown command: {}\n\nUse /help to see available commands.", command)
}

/// Command overview for `/help`.
pub fn help() -> String {
    format!(
        "📚 DailyNewzz Bot Commands:\n\n\
        {} - Start the setup and choose your preferred news genre.\n\
        /start - Same as saying {}.\n\
        /get_news - Fetch the latest news articles for your selected genre.\n\
        /reset - Reset your genre preference and choose again.\n\
        /help - Display this help message.",
        GREETING, GREETING
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_prompt_lists_catalog() {
        let prompt = genre_prompt();
        assert!(prompt.contains("1. Technology"));
        assert!(prompt.contains("3. Entertainment"));
        assert!(prompt.contains("7. General"));
    }

    #[test]
    fn test_help_mentions_every_command() {
        let text = help();
        for cmd in ["hi", "/start", "/get_news", "/reset", "/help"] {
            assert!(text.contains(cmd), "help is missing {cmd}");
        }
    }
}
