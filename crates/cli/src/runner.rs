use crate::config::Config;
use crate::poll::{self, PollRequest};
use crate::telegram::{self, help_text, IncomingCommand, TelegramCommand, TelegramTransport};
use anyhow::{Context, Result};
use moviequeue_catalog::{Catalog, TimApi};
use moviequeue_dispatch::{deliver, Dispatcher as CommandRouter, Transport};
use moviequeue_message::MessageSplitter;
use moviequeue_providers::{ProviderAggregator, WostreamClient};
use std::convert::Infallible;
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, HandlerExt, UpdateFilterExt};
use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

fn catalog(config: &Config) -> Result<Arc<dyn Catalog>> {
    let api = TimApi::new(config.api_base_url.clone(), config.api_token.clone())
        .context("failed to build catalog client")?;
    Ok(Arc::new(api))
}

fn router(config: &Config, catalog: Arc<dyn Catalog>) -> Result<CommandRouter> {
    let lookup = WostreamClient::new(&config.wostream_base_url)
        .context("failed to build streaming lookup client")?;
    Ok(
        CommandRouter::new(catalog, ProviderAggregator::new(Arc::new(lookup)))
            .with_splitter(MessageSplitter::new(config.message.clone()))
            .with_help(help_text()),
    )
}

/// Long polls Telegram and answers every command concurrently until ctrl-c.
/// Only fresh messages are routed; edits never reach the handler.
pub async fn run_bot(config: &Config) -> Result<()> {
    if config.api_token.is_none() {
        log::warn!("API_TOKEN is not set; add, watch and delete will fail");
    }

    let bot = Bot::new(config.telegram_token()?);
    let me = bot
        .get_me()
        .await
        .context("failed to authenticate with telegram")?;
    log::info!(
        "moviequeue {} running as @{}",
        config.app_version,
        me.username()
    );
    if let Err(err) = bot.set_my_commands(TelegramCommand::bot_commands()).await {
        log::warn!("failed to register command list: {err}");
    }

    let router = router(config, catalog(config)?)?;
    let handler = Update::filter_message()
        .filter_command::<TelegramCommand>()
        .endpoint(on_command);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .default_handler(|update| async move {
            log::trace!("ignored update {update:?}");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "error in command handler",
        ))
        // no per-chat ordering: every update is handled in its own task
        .distribution_function(|_| None::<Infallible>)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("shut down");
    Ok(())
}

async fn on_command(
    bot: Bot,
    msg: Message,
    command: TelegramCommand,
    router: CommandRouter,
) -> ResponseResult<()> {
    let incoming = IncomingCommand::new(msg.chat.id, msg.id, command);
    answer(&router, &TelegramTransport(bot), incoming).await;
    Ok(())
}

/// Dispatches one command and delivers its reply. Delivery failures are logged only.
pub async fn answer(router: &CommandRouter, transport: &dyn Transport, incoming: IncomingCommand) {
    let messages = router.handle(&incoming.command).await;
    if let Err(err) = deliver(transport, incoming.target, &messages).await {
        log::error!(
            "failed to answer /{} in chat {}: {err:#}",
            incoming.command.verb(),
            incoming.target.chat_id
        );
    }
}

/// Posts the weekly movie poll built from the head of the queue.
pub async fn send_movie_poll(config: &Config) -> Result<()> {
    let catalog = catalog(config)?;
    let queued = catalog
        .queued(Some(poll::movie_slots(&config.poll_default_options)))
        .await
        .context("failed to fetch queue")?;
    let request = poll::movie_poll(&queued, &config.poll_default_options);
    send_poll(config, &request).await
}

pub async fn send_participation_poll(config: &Config) -> Result<()> {
    send_poll(config, &poll::participation_poll()).await
}

async fn send_poll(config: &Config, request: &PollRequest) -> Result<()> {
    if request.options.len() < 2 {
        anyhow::bail!(
            "a poll needs at least two options, got {}",
            request.options.len()
        );
    }
    let chat_id = config.poll_chat_id()?;
    let bot = Bot::new(config.telegram_token()?);
    telegram::send_poll(&bot, chat_id, request).await?;
    log::info!("sent poll {:?} to chat {chat_id}", request.question);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use moviequeue_catalog::InMemoryCatalog;
    use moviequeue_dispatch::{ChatTarget, OutboundMessage, ReplyMarkup};
    use moviequeue_protocol::{CatalogItem, Command, MovieStatus, UpstreamResult, Verb};
    use moviequeue_providers::{ProviderListing, StreamingLookup};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct NoProviders;

    #[async_trait]
    impl StreamingLookup for NoProviders {
        async fn lookup(
            &self,
            _title: &str,
            _year: Option<u16>,
        ) -> UpstreamResult<Option<Vec<ProviderListing>>> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(ChatTarget, OutboundMessage)>>,
        fail: bool,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(&self, target: ChatTarget, message: &OutboundMessage) -> Result<()> {
            if self.fail {
                anyhow::bail!("network down");
            }
            self.sent
                .lock()
                .unwrap()
                .push((target, message.clone()));
            Ok(())
        }
    }

    fn router(catalog: Arc<InMemoryCatalog>) -> CommandRouter {
        CommandRouter::new(catalog, ProviderAggregator::new(Arc::new(NoProviders)))
    }

    fn incoming(command: Command) -> IncomingCommand {
        IncomingCommand {
            target: ChatTarget {
                chat_id: 1,
                origin_message_id: Some(2),
            },
            command,
        }
    }

    #[tokio::test]
    async fn answer_delivers_to_origin_chat() {
        let catalog = Arc::new(InMemoryCatalog::with_items([CatalogItem::new(
            "q1",
            "Heat",
            Some(1995),
        )]));
        let transport = Recorder::default();

        answer(
            &router(catalog.clone()),
            &transport,
            incoming(Command::new(Verb::Watch, ["heat"])),
        )
        .await;

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.chat_id, 1);
        assert_eq!(sent[0].1.text, r"Heat \(1995\) marked as watched");
        assert_eq!(sent[0].1.markup, Some(ReplyMarkup::RemoveKeyboard));
        assert_eq!(
            catalog.mutations(),
            vec![("q1".into(), MovieStatus::Watched)]
        );
    }

    #[tokio::test]
    async fn delivery_failure_does_not_panic() {
        let transport = Recorder {
            fail: true,
            ..Recorder::default()
        };
        answer(
            &router(Arc::new(InMemoryCatalog::new())),
            &transport,
            incoming(Command::new(Verb::Queue, Vec::<String>::new())),
        )
        .await;

        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
