use crate::reply::ChoiceKeyboard;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Where a reply goes: the chat and the message that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTarget {
    pub chat_id: i64,
    pub origin_message_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyMarkup {
    Keyboard(ChoiceKeyboard),
    RemoveKeyboard,
}

/// One MarkdownV2 fragment ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
    /// Deliver without notifying the chat
    pub silent: bool,
    pub link_preview: bool,
    /// Quote the message that triggered the reply
    pub quote_origin: bool,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, target: ChatTarget, message: &OutboundMessage) -> Result<()>;
}

/// Sends fragments in order, stopping at the first failure.
pub async fn deliver(
    transport: &dyn Transport,
    target: ChatTarget,
    messages: &[OutboundMessage],
) -> Result<()> {
    for (idx, message) in messages.iter().enumerate() {
        transport
            .send(target, message)
            .await
            .with_context(|| format!("failed to send fragment {}/{}", idx + 1, messages.len()))?;
    }
    Ok(())
}
