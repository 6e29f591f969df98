//! Per-user interaction state machine.
//!
//! The controller is platform-neutral: the chat adapter translates inbound
//! events into [`Channel`] + text or [`Command`] and supplies a [`ReplySink`]
//! bound to the originating conversation.
//!
//! ```text
//! Absent --hi--> AwaitingSelection --valid reply--> Confirmed(genre)
//!   ^                  ^    |                              |
//!   |                  |    +--invalid reply (re-prompt)   |
//!   +------------------+------------/reset-----------------+
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::formatter::{format_headlines, split_message, MESSAGE_LIMIT};
use crate::genre::Genre;
use crate::messages;
use crate::news::NewsSource;
use crate::preferences::{Onboarding, PreferenceState, PreferenceStore, UserId};
use crate::selection::{parse_selection, Selection};

/// Kind of conversation an event arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// One-to-one chat between the user and the bot.
    Direct,
    /// Any group or shared channel.
    Shared,
}

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Platform first-contact command; behaves like the greeting.
    Start,
    Help,
    GetNews,
    Reset,
}

/// Outbound side of a conversation.
#[async_trait]
pub trait ReplySink: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send one message. Callers keep `text` within the channel limit.
    async fn send_text(&self, text: &str) -> Result<(), Self::Error>;
}

/// Drives onboarding, selection and headline requests.
pub struct Controller {
    store: PreferenceStore,
    news: Arc<dyn NewsSource>,
    message_limit: usize,
}

impl Controller {
    /// Create a controller owning `store` and fetching from `news`.
    pub fn new(store: PreferenceStore, news: Arc<dyn NewsSource>) -> Self {
        Self {
            store,
            news,
            message_limit: MESSAGE_LIMIT,
        }
    }

    /// Override the per-message character limit used when delivering.
    pub fn with_message_limit(mut self, limit: usize) -> Self {
        self.message_limit = limit;
        self
    }

    /// The preference store.
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Handle a plain (non-command) text message.
    ///
    /// Text outside direct messages is ignored.
    pub async fn handle_text<S: ReplySink>(
        &self,
        user: UserId,
        channel: Channel,
        text: &str,
        sink: &S,
    ) -> Result<(), S::Error> {
        if channel != Channel::Direct {
            debug!(user_id = %user, "Ignoring text outside direct message");
            return Ok(());
        }

        let normalized = text.trim().to_lowercase();
        if normalized == messages::GREETING {
            return self.greet(user, sink).await;
        }

        match self.store.get(user).await {
            PreferenceState::AwaitingSelection => self.select(user, &normalized, sink).await,
            state => self.deliver(sink, &state_reminder(state)).await,
        }
    }

    /// Handle a bot command.
    pub async fn handle_command<S: ReplySink>(
        &self,
        user: UserId,
        channel: Channel,
        command: Command,
        sink: &S,
    ) -> Result<(), S::Error> {
        if channel != Channel::Direct {
            info!(user_id = %user, command = ?command, "Rejected command outside direct message");
            return self.deliver(sink, messages::DIRECT_MESSAGE_ONLY).await;
        }

        match command {
            Command::Start => self.greet(user, sink).await,
            Command::Help => self.deliver(sink, &messages::help()).await,
            Command::GetNews => self.get_news(user, sink).await,
            Command::Reset => self.reset(user, sink).await,
        }
    }

    /// Fetch and format headlines for `genre`.
    ///
    /// Always returns user-presentable text; upstream failures become fixed
    /// messages and the cause is logged.
    pub async fn headlines_text(&self, genre: Genre) -> String {
        match self.news.top_headlines(genre).await {
            Ok(response) if !response.is_ok() => {
                warn!(
                    genre = %genre,
                    status = %response.status,
                    code = ?response.code,
                    message = ?response.message,
                    "Headlines endpoint reported failure"
                );
                messages::NO_ARTICLES.to_string()
            }
            Ok(response) if response.articles.is_empty() => {
                info!(genre = %genre, "No articles returned");
                messages::NO_ARTICLES.to_string()
            }
            Ok(response) => format_headlines(genre, &response.articles),
            Err(e) => {
                error!(genre = %genre, error = %e, "Error fetching news");
                messages::FETCH_ERROR.to_string()
            }
        }
    }

    async fn greet<S: ReplySink>(&self, user: UserId, sink: &S) -> Result<(), S::Error> {
        match self.store.begin_onboarding(user).await {
            Onboarding::Started => {
                info!(user_id = %user, "Onboarding started");
                self.deliver(sink, &messages::genre_prompt()).await
            }
            Onboarding::AlreadyConfirmed(genre) => {
                debug!(user_id = %user, genre = %genre, "Greeting after confirmation");
                self.deliver(sink, &messages::already_selected(genre)).await
            }
        }
    }

    async fn select<S: ReplySink>(&self, user: UserId, input: &str, sink: &S) -> Result<(), S::Error> {
        match parse_selection(input) {
            Selection::Valid(genre) => {
                if self.store.confirm(user, genre).await {
                    info!(user_id = %user, genre = %genre, "Genre selected");
                    self.deliver(sink, &messages::selection_confirmed(genre)).await
                } else {
                    // Another event for this user moved it out of AwaitingSelection first.
                    let state = self.store.get(user).await;
                    debug!(user_id = %user, genre = %genre, state = ?state, "Selection superseded");
                    self.deliver(sink, &state_reminder(state)).await
                }
            }
            Selection::Invalid => {
                debug!(user_id = %user, input = %input, "Invalid genre selection");
                self.deliver(sink, messages::INVALID_SELECTION).await
            }
        }
    }

    async fn get_news<S: ReplySink>(&self, user: UserId, sink: &S) -> Result<(), S::Error> {
        let genre = match self.store.get(user).await {
            PreferenceState::Confirmed(genre) => genre,
            PreferenceState::Absent | PreferenceState::AwaitingSelection => {
                return self.deliver(sink, messages::NO_GENRE_SELECTED).await;
            }
        };

        self.deliver(sink, &messages::fetching(genre)).await?;
        let text = self.headlines_text(genre).await;
        self.deliver(sink, &text).await?;
        info!(user_id = %user, genre = %genre, "Headlines delivered");
        Ok(())
    }

    async fn reset<S: ReplySink>(&self, user: UserId, sink: &S) -> Result<(), S::Error> {
        self.store.reset(user).await;
        info!(user_id = %user, "Preferences reset");
        self.deliver(sink, messages::RESET_DONE).await?;
        self.deliver(sink, &messages::genre_prompt()).await
    }

    /// Send `text`, split into chunks that respect the channel limit.
    async fn deliver<S: ReplySink>(&self, sink: &S, text: &str) -> Result<(), S::Error> {
        let chunks = split_message(text, self.message_limit);
        if chunks.len() > 1 {
            debug!(chunks = chunks.len(), "Splitting long message");
        }
        for chunk in &chunks {
            sink.send_text(chunk).await?;
        }
        Ok(())
    }
}

/// Reply describing where the user currently stands.
fn state_reminder(state: PreferenceState) -> String {
    match state {
        PreferenceState::Absent => messages::SAY_HI.to_string(),
        PreferenceState::AwaitingSelection => messages::genre_prompt(),
        PreferenceState::Confirmed(genre) => messages::already_selected(genre),
    }
}
