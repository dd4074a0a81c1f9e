//! Telegram adapter on teloxide: command parsing, message and poll delivery.

use crate::poll::PollRequest;
use anyhow::Context;
use async_trait::async_trait;
use moviequeue_dispatch::{ChatTarget, ChoiceKeyboard, OutboundMessage, ReplyMarkup, Transport};
use moviequeue_message::escape_markdown;
use moviequeue_protocol::{Command, Verb};
use teloxide::prelude::*;
use teloxide::types::{
    KeyboardButton, KeyboardMarkup, KeyboardRemove, LinkPreviewOptions, MessageId, ParseMode,
    ReplyParameters,
};
use teloxide::utils::command::BotCommands;

/// Chat commands as registered with Telegram. Hidden variants are aliases.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum TelegramCommand {
    #[command(description = "add movie to queue (/add {imdb link or title})")]
    Add(String),
    #[command(description = "delete movie from queue (/delete {title})")]
    Delete(String),
    #[command(description = "mark movie as watched (/watch {title})")]
    Watch(String),
    #[command(description = "list all queued movies")]
    Queue,
    #[command(description = "find where a movie is streaming (/discover {title})")]
    Discover(String),
    #[command(description = "tell who has the hand on the mouse")]
    WerHatDieHandAnDerMaus,
    #[command(description = "show this text")]
    Help,
    #[command(hide)]
    Wostream(String),
    #[command(hide)]
    Start,
}

impl TelegramCommand {
    pub fn into_command(self) -> Command {
        let (verb, args) = match self {
            Self::Add(args) => (Verb::Add, args),
            Self::Delete(args) => (Verb::Delete, args),
            Self::Watch(args) => (Verb::Watch, args),
            Self::Queue => (Verb::Queue, String::new()),
            Self::Discover(args) | Self::Wostream(args) => (Verb::Discover, args),
            Self::WerHatDieHandAnDerMaus => (Verb::Identify, String::new()),
            Self::Help | Self::Start => (Verb::Help, String::new()),
        };
        Command::new(verb, args.split_whitespace())
    }
}

/// Command listing answered to `/help`, escaped for MarkdownV2.
pub fn help_text() -> String {
    escape_markdown(&TelegramCommand::descriptions().to_string())
}

/// A command addressed to this bot, with the chat to answer in.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingCommand {
    pub target: ChatTarget,
    pub command: Command,
}

impl IncomingCommand {
    pub fn new(chat: ChatId, origin: MessageId, command: TelegramCommand) -> Self {
        Self {
            target: ChatTarget {
                chat_id: chat.0,
                origin_message_id: Some(i64::from(origin.0)),
            },
            command: command.into_command(),
        }
    }
}

fn keyboard_markup(keyboard: &ChoiceKeyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>());
    let mut markup = KeyboardMarkup::new(rows);
    markup.one_time_keyboard = keyboard.one_time;
    markup.selective = keyboard.selective;
    markup.resize_keyboard = keyboard.resize;
    markup.input_field_placeholder = keyboard.placeholder.clone().unwrap_or_default();
    markup
}

fn reply_markup(markup: &ReplyMarkup) -> teloxide::types::ReplyMarkup {
    match markup {
        ReplyMarkup::Keyboard(keyboard) => {
            teloxide::types::ReplyMarkup::Keyboard(keyboard_markup(keyboard))
        }
        ReplyMarkup::RemoveKeyboard => {
            teloxide::types::ReplyMarkup::KeyboardRemove(KeyboardRemove::new())
        }
    }
}

fn link_preview(enabled: bool) -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: !enabled,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// A selective keyboard is only shown to users the message replies to,
/// so it always quotes the origin.
fn reply_parameters(target: ChatTarget, message: &OutboundMessage) -> Option<ReplyParameters> {
    let selective = matches!(
        &message.markup,
        Some(ReplyMarkup::Keyboard(keyboard)) if keyboard.selective
    );
    if !(message.quote_origin || selective) {
        return None;
    }
    let origin = i32::try_from(target.origin_message_id?).ok()?;
    Some(ReplyParameters::new(MessageId(origin)).allow_sending_without_reply())
}

/// Sends rendered fragments through a teloxide [`Bot`].
#[derive(Clone)]
pub struct TelegramTransport(pub Bot);

#[async_trait]
impl Transport for TelegramTransport {
    async fn send(&self, target: ChatTarget, message: &OutboundMessage) -> anyhow::Result<()> {
        let mut request = self
            .0
            .send_message(ChatId(target.chat_id), message.text.as_str())
            .parse_mode(ParseMode::MarkdownV2)
            .disable_notification(message.silent)
            .link_preview_options(link_preview(message.link_preview));
        if let Some(parameters) = reply_parameters(target, message) {
            request = request.reply_parameters(parameters);
        }
        if let Some(markup) = &message.markup {
            request = request.reply_markup(reply_markup(markup));
        }
        request
            .await
            .with_context(|| format!("sendMessage to chat {}", target.chat_id))?;
        Ok(())
    }
}

pub async fn send_poll(bot: &Bot, chat_id: i64, poll: &PollRequest) -> anyhow::Result<Message> {
    let message = bot
        .send_poll(ChatId(chat_id), poll.question.as_str(), poll.options.clone())
        .is_anonymous(poll.is_anonymous)
        .allows_multiple_answers(poll.allows_multiple_answers)
        .await
        .with_context(|| format!("sendPoll to chat {chat_id}"))?;
    Ok(message)
}
