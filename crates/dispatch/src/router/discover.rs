use crate::error::Result;
use crate::format;
use crate::reply::{KeyboardAction, Reply, TextReply};
use moviequeue_catalog::Catalog;
use moviequeue_providers::ProviderAggregator;

/// Every catalog hit is looked up, whatever its status.
pub(super) async fn run(
    catalog: &dyn Catalog,
    providers: &ProviderAggregator,
    query: &str,
) -> Result<Reply> {
    let movies = catalog.search(query, None).await?;
    if movies.is_empty() {
        return Ok(Reply::text(format::NOTHING_IN_CATALOG));
    }

    let markdown = match providers.aggregate(&movies).await {
        Some(found) => format::providers(&found),
        None => format::unavailable(&movies),
    };

    Ok(Reply::Text(TextReply {
        markdown,
        keyboard: KeyboardAction::Keep,
        link_preview: true,
    }))
}
