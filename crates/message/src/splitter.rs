use serde::Deserialize;

/// Maximum length of a single Telegram text message.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Configuration for [`MessageSplitter`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Upper bound for a fragment, in Unicode scalar values
    pub max_fragment_len: usize,
    /// Separator used to cut the input into lines
    pub line_separator: String,
    /// Separator used to glue lines of one fragment back together
    pub join_separator: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_fragment_len: TELEGRAM_MESSAGE_LIMIT,
            line_separator: "\n".to_string(),
            join_separator: "\n".to_string(),
        }
    }
}

/// Splits long replies into chat-sized fragments without breaking lines.
#[derive(Debug, Clone, Default)]
pub struct MessageSplitter {
    config: SplitConfig,
}

impl MessageSplitter {
    #[must_use]
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Greedily packs lines into fragments.
    ///
    /// A line is added to the current fragment while the fragment, joined with the line,
    /// stays strictly below `max_fragment_len`. A line that does not even fit an empty
    /// fragment is emitted alone; lines are never cut.
    pub fn split(&self, text: &str) -> Vec<String> {
        let max = self.config.max_fragment_len;
        let join_len = self.config.join_separator.chars().count();

        let lines: Vec<&str> = if self.config.line_separator.is_empty() {
            vec![text]
        } else {
            text.split(self.config.line_separator.as_str()).collect()
        };

        let mut fragments: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0usize;

        let mut idx = 0;
        while idx < lines.len() {
            let line = lines[idx];
            let line_len = line.chars().count();
            let projected = current_len + line_len + current.len() * join_len;

            if projected < max || current.is_empty() {
                current_len += line_len;
                current.push(line);
                idx += 1;
            } else {
                fragments.push(std::mem::take(&mut current));
                current_len = 0;
            }
        }

        if !current.is_empty() {
            fragments.push(current);
        }

        fragments
            .into_iter()
            .map(|lines| lines.join(&self.config.join_separator))
            .collect()
    }
}

/// Splits with the Telegram defaults (4096, `\n`, `\n`).
pub fn split_message(text: &str) -> Vec<String> {
    MessageSplitter::default().split(text)
}
