//! MarkdownV2 rendering of catalog and provider data. Every interpolated value is escaped
//! here exactly once.

use moviequeue_message::{escape_code, escape_markdown};
use moviequeue_protocol::{CatalogItem, MovieStatus, ProviderMovie, ProviderResult, Verb};

pub(crate) const EMPTY_QUEUE: &str = "the queue is empty";
pub(crate) const NOTHING_IN_CATALOG: &str = "couldn't find any movie in tim which matches";
pub(crate) const IDENTITY: &str = "Tim";

fn year_suffix(year: Option<u16>) -> String {
    year.map(|y| format!(r" \({y}\)")).unwrap_or_default()
}

/// `Title \(1999\) 8\.7⭐`, the title linked to IMDb when the id is known.
pub(crate) fn movie_line(item: &CatalogItem) -> String {
    let title = escape_markdown(&item.title);
    let mut line = match item.imdb_url() {
        Some(url) => format!("[{title}]({url})"),
        None => title,
    };
    line.push_str(&year_suffix(item.year));
    if let Some(rating) = &item.rating {
        line.push_str(&format!(" {}⭐", escape_markdown(rating)));
    }
    line
}

pub(crate) fn plain_movie_line(item: &CatalogItem) -> String {
    format!("{}{}", escape_markdown(&item.title), year_suffix(item.year))
}

pub(crate) fn added(item: &CatalogItem) -> String {
    format!("{} added to the queue", movie_line(item))
}

pub(crate) fn marked(item: &CatalogItem, status: MovieStatus) -> String {
    format!("{} marked as {}", movie_line(item), status.past_tense())
}

pub(crate) fn no_match(query: &str) -> String {
    format!("no match found for `{}`", escape_code(query))
}

pub(crate) fn queue(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return EMPTY_QUEUE.to_string();
    }
    items.iter().map(movie_line).collect::<Vec<_>>().join("\n")
}

fn provider_movie(movie: &ProviderMovie) -> String {
    format!("{}{}", escape_markdown(&movie.title), year_suffix(movie.year))
}

pub(crate) fn provider_block(provider: &ProviderResult) -> String {
    let mut lines = Vec::with_capacity(provider.len() + 1);
    lines.push(format!("__{}__", escape_markdown(&provider.name)));
    lines.extend(provider.movies().iter().map(provider_movie));
    lines.join("\n")
}

pub(crate) fn providers(providers: &[ProviderResult]) -> String {
    providers
        .iter()
        .map(provider_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn unavailable(movies: &[CatalogItem]) -> String {
    let titles = movies
        .iter()
        .map(plain_movie_line)
        .collect::<Vec<_>>()
        .join("\n");
    format!("Couldn't find any movies\n{titles}\non https://werstreamt\\.es")
}

pub(crate) fn help() -> String {
    let mut lines = vec![escape_markdown("These commands are supported:")];
    lines.extend(Verb::ALL.iter().map(|verb| escape_markdown(&verb.slash())));
    lines.join("\n")
}
