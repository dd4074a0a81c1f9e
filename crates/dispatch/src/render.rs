use crate::reply::{KeyboardAction, Reply};
use crate::transport::{OutboundMessage, ReplyMarkup};
use moviequeue_message::{escape_markdown, MessageSplitter};

/// Turns a reply into ordered fragments.
///
/// Error text is escaped here; text and choice replies arrive already escaped. Every
/// fragment after the first is silent, and each fragment carries the reply's markup.
pub fn render(reply: &Reply, splitter: &MessageSplitter) -> Vec<OutboundMessage> {
    let (text, markup, link_preview, quote_origin) = match reply {
        Reply::Text(text) => {
            let markup = match text.keyboard {
                KeyboardAction::Keep => None,
                KeyboardAction::Remove => Some(ReplyMarkup::RemoveKeyboard),
            };
            (text.markdown.clone(), markup, text.link_preview, false)
        }
        Reply::Choice(choice) => (
            choice.prompt.clone(),
            Some(ReplyMarkup::Keyboard(choice.keyboard.clone())),
            false,
            false,
        ),
        Reply::Error(error) => (escape_markdown(&error.message), None, false, true),
    };

    splitter
        .split(&text)
        .into_iter()
        .enumerate()
        .map(|(idx, fragment)| OutboundMessage {
            text: fragment,
            markup: markup.clone(),
            silent: idx > 0,
            link_preview,
            quote_origin,
        })
        .collect()
}
