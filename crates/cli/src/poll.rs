use moviequeue_protocol::CatalogItem;

/// Telegram caps a poll at ten options.
pub const MAX_POLL_OPTIONS: usize = 10;
const MAX_OPTION_LEN: usize = 100;

pub const MOVIE_QUESTION: &str = "Which movie do you want to watch?";
pub const PARTICIPATION_QUESTION: &str = "Ich bin";
pub const PARTICIPATION_OPTIONS: [&str; 3] = ["dabei", "nicht dabei", "vielleicht dabei"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRequest {
    pub question: String,
    pub options: Vec<String>,
    pub is_anonymous: bool,
    pub allows_multiple_answers: bool,
}

/// How many queued movies fit next to the default options.
pub fn movie_slots(defaults: &[String]) -> usize {
    MAX_POLL_OPTIONS.saturating_sub(defaults.len())
}

/// Queued titles first, then the default options, capped at [`MAX_POLL_OPTIONS`].
pub fn movie_poll(queued: &[CatalogItem], defaults: &[String]) -> PollRequest {
    let options = queued
        .iter()
        .take(movie_slots(defaults))
        .map(poll_option)
        .chain(defaults.iter().cloned())
        .take(MAX_POLL_OPTIONS)
        .collect();

    PollRequest {
        question: MOVIE_QUESTION.to_string(),
        options,
        is_anonymous: false,
        allows_multiple_answers: true,
    }
}

pub fn participation_poll() -> PollRequest {
    PollRequest {
        question: PARTICIPATION_QUESTION.to_string(),
        options: PARTICIPATION_OPTIONS.iter().map(|o| o.to_string()).collect(),
        is_anonymous: false,
        allows_multiple_answers: false,
    }
}

fn poll_option(item: &CatalogItem) -> String {
    item.title.chars().take(MAX_OPTION_LEN).collect()
}
