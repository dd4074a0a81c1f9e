use crate::error::Result;
use crate::format;
use crate::keyboard::mark_choice;
use crate::reply::Reply;
use moviequeue_catalog::Catalog;
use moviequeue_protocol::{MovieStatus, Verb};
use moviequeue_search::{resolve, MatchOutcome};

/// Resolves `title` among queued movies and marks the match with `status`.
/// Non-ambiguous replies always clear the reply keyboard.
pub(super) async fn run(
    catalog: &dyn Catalog,
    title: &str,
    verb: Verb,
    status: MovieStatus,
) -> Result<Reply> {
    let candidates = catalog.search(title, Some(MovieStatus::Queued)).await?;

    match resolve(title, candidates) {
        MatchOutcome::NoMatch => Ok(Reply::text_clearing_keyboard(format::no_match(title))),
        MatchOutcome::AmbiguousMatch(candidates) => {
            log::debug!("{} candidates for {title:?}", candidates.len());
            Ok(Reply::Choice(mark_choice(&candidates, verb, status)))
        }
        MatchOutcome::SingleMatch(item) => {
            let updated = catalog.mark(&item.id, status).await?;
            log::info!("marked {:?} ({}) as {}", updated.title, updated.id, status);
            Ok(Reply::text_clearing_keyboard(format::marked(&updated, status)))
        }
    }
}
