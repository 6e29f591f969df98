//! Command and message handlers for the Telegram bot.
//!
//! Handlers only translate between teloxide types and the core controller;
//! every decision about what to reply lives in `dailynewzz_core`.

use std::sync::Arc;

use async_trait::async_trait;
use dailynewzz_core::{messages, Channel, ReplySink, UserId};
use teloxide::prelude::*;
use teloxide::types::{Chat, ChatId};
use teloxide::utils::command::BotCommands;
use teloxide::RequestError;
use tracing::{debug, info, warn};

use crate::state::TelegramState;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the setup and choose a news genre")]
    Start,

    #[command(description = "Show help message")]
    Help,

    #[command(description = "Fetch the latest headlines for your genre")]
    GetNews,

    #[command(description = "Reset your genre and choose again")]
    Reset,
}

impl From<Command> for dailynewzz_core::Command {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Start => dailynewzz_core::Command::Start,
            Command::Help => dailynewzz_core::Command::Help,
            Command::GetNews => dailynewzz_core::Command::GetNews,
            Command::Reset => dailynewzz_core::Command::Reset,
        }
    }
}

/// Replies into the chat an update came from.
pub struct ChatReplies {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatReplies {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReplySink for ChatReplies {
    type Error = RequestError;

    async fn send_text(&self, text: &str) -> Result<(), Self::Error> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

/// Private chats are the only direct-message context.
pub fn channel_of(chat: &Chat) -> Channel {
    if chat.is_private() {
        Channel::Direct
    } else {
        Channel::Shared
    }
}

/// Sender of a message; falls back to the chat id for private chats.
fn user_of(msg: &Message) -> Option<UserId> {
    msg.from
        .as_ref()
        .map(|u| UserId(u.id.0))
        .or_else(|| {
            if msg.chat.is_private() {
                u64::try_from(msg.chat.id.0).ok().map(UserId)
            } else {
                None
            }
        })
}

/// Dispatch commands to the controller.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<TelegramState>,
) -> ResponseResult<()> {
    let Some(user) = user_of(&msg) else {
        warn!(chat_id = %msg.chat.id, "Command without sender, ignoring");
        return Ok(());
    };

    let replies = ChatReplies::new(bot, msg.chat.id);
    state
        .controller()
        .handle_command(user, channel_of(&msg.chat), cmd.into(), &replies)
        .await
}

/// Handle regular text messages (greeting and genre replies).
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    state: Arc<TelegramState>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(user) = user_of(&msg) else {
        debug!(chat_id = %msg.chat.id, "Message without sender, ignoring");
        return Ok(());
    };

    let replies = ChatReplies::new(bot, msg.chat.id);
    state
        .controller()
        .handle_text(user, channel_of(&msg.chat), text, &replies)
        .await
}

/// Reply to a slash command that did not parse.
///
/// Only private chats get a reply; other bots' commands in groups are ignored.
pub async fn handle_unknown_command(bot: Bot, msg: Message) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let command = text.split_whitespace().next().unwrap_or(text);
    if !msg.chat.is_private() {
        debug!(chat_id = %msg.chat.id, cmd = %command, "Ignoring unknown command in shared chat");
        return Ok(());
    }

    info!(chat_id = %msg.chat.id, cmd = %command, "Unrecognized command");
    bot.send_message(msg.chat.id, messages::unknown_command(command)).await?;
    Ok(())
}

/// Whether text looks like a slash command.
pub fn is_command_text(text: Option<&str>) -> bool {
    text.map(|t| t.starts_with('/')).unwrap_or(false)
}
