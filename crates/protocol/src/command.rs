use std::fmt;

/// Command verbs understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Add,
    Delete,
    Watch,
    Queue,
    Discover,
    Identify,
    Help,
}

impl Verb {
    pub const ALL: [Verb; 7] = [
        Verb::Add,
        Verb::Delete,
        Verb::Watch,
        Verb::Queue,
        Verb::Discover,
        Verb::Identify,
        Verb::Help,
    ];

    /// Canonical name, without the leading slash.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Watch => "watch",
            Self::Queue => "queue",
            Self::Discover => "discover",
            Self::Identify => "werhatdiehandandermaus",
            Self::Help => "help",
        }
    }

    /// Name as typed in chat, e.g. `/watch`.
    pub fn slash(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed chat command. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: Verb,
    args: Vec<String>,
}

impl Command {
    pub fn new(verb: Verb, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            verb,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments joined with single spaces, as used for title queries.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}
