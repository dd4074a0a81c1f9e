mod add;
mod discover;
mod mark;
mod queue;

use crate::error::{classify, DispatchError, Result};
use crate::format;
use crate::render::render;
use crate::reply::Reply;
use crate::transport::OutboundMessage;
use moviequeue_catalog::Catalog;
use moviequeue_message::MessageSplitter;
use moviequeue_protocol::{Command, MovieStatus, Verb};
use moviequeue_providers::ProviderAggregator;
use std::sync::Arc;

const TITLE_REQUIRED: &str = "movie title required as argument";
const IMDB_LINK_REQUIRED: &str = "imdb link required as argument";

/// Routes commands to the catalog and the provider aggregator.
///
/// Holds no per-command state; one instance serves every chat concurrently.
#[derive(Clone)]
pub struct Dispatcher {
    catalog: Arc<dyn Catalog>,
    providers: ProviderAggregator,
    splitter: MessageSplitter,
    help: Option<String>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<dyn Catalog>, providers: ProviderAggregator) -> Self {
        Self {
            catalog,
            providers,
            splitter: MessageSplitter::default(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_splitter(mut self, splitter: MessageSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Replaces the default verb listing answered to `help`. Must be MarkdownV2-safe.
    #[must_use]
    pub fn with_help(mut self, markdown: impl Into<String>) -> Self {
        self.help = Some(markdown.into());
        self
    }

    /// Runs a command and renders the reply into transport-ready fragments.
    pub async fn handle(&self, command: &Command) -> Vec<OutboundMessage> {
        let reply = self.dispatch(command).await;
        render(&reply, &self.splitter)
    }

    /// Runs a command. Failures become [`Reply::Error`]; there is exactly one reply per command.
    pub async fn dispatch(&self, command: &Command) -> Reply {
        log::debug!("dispatching /{} {:?}", command.verb(), command.args());
        match self.route(command).await {
            Ok(reply) => reply,
            Err(err) => classify(&err).into_reply(),
        }
    }

    async fn route(&self, command: &Command) -> Result<Reply> {
        match command.verb() {
            Verb::Identify => Ok(Reply::text(format::IDENTITY)),
            Verb::Help => Ok(Reply::text(
                self.help.clone().unwrap_or_else(format::help),
            )),
            Verb::Add => {
                let url = required_first(command, IMDB_LINK_REQUIRED)?;
                add::run(self.catalog.as_ref(), url).await
            }
            Verb::Delete => {
                let title = required_title(command)?;
                mark::run(self.catalog.as_ref(), &title, Verb::Delete, MovieStatus::Deleted).await
            }
            Verb::Watch => {
                let title = required_title(command)?;
                mark::run(self.catalog.as_ref(), &title, Verb::Watch, MovieStatus::Watched).await
            }
            Verb::Queue => queue::run(self.catalog.as_ref()).await,
            Verb::Discover => {
                let title = required_title(command)?;
                discover::run(self.catalog.as_ref(), &self.providers, &title).await
            }
        }
    }
}

fn required_first<'a>(command: &'a Command, requirement: &'static str) -> Result<&'a str> {
    command
        .args()
        .first()
        .map(String::as_str)
        .ok_or(DispatchError::MissingArguments(requirement))
}

fn required_title(command: &Command) -> Result<String> {
    if command.args().is_empty() {
        return Err(DispatchError::MissingArguments(TITLE_REQUIRED));
    }
    Ok(command.joined_args())
}
