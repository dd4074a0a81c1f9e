use crate::error::ErrorKind;

/// What a command answers with. Consumed by [`crate::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(TextReply),
    Choice(ChoiceReply),
    Error(ErrorReply),
}

impl Reply {
    /// Text that is already MarkdownV2-safe.
    pub fn text(markdown: impl Into<String>) -> Self {
        Self::Text(TextReply {
            markdown: markdown.into(),
            keyboard: KeyboardAction::Keep,
            link_preview: false,
        })
    }

    /// Same as [`Reply::text`] but also clears any reply keyboard left from a previous choice.
    pub fn text_clearing_keyboard(markdown: impl Into<String>) -> Self {
        Self::Text(TextReply {
            markdown: markdown.into(),
            keyboard: KeyboardAction::Remove,
            link_preview: false,
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReply {
    pub markdown: String,
    pub keyboard: KeyboardAction,
    pub link_preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    Keep,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceReply {
    pub prompt: String,
    pub keyboard: ChoiceKeyboard,
}

/// One-shot reply keyboard shown only to the user who issued the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceKeyboard {
    pub rows: Vec<Vec<String>>,
    pub one_time: bool,
    pub selective: bool,
    pub resize: bool,
    pub placeholder: Option<String>,
}

/// Raw, unescaped error text; escaping happens while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReply {
    pub kind: ErrorKind,
    pub message: String,
}
