use moviequeue_protocol::CatalogItem;

/// Result of matching a free-text query against catalog candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    NoMatch,
    SingleMatch(CatalogItem),
    /// Always at least two candidates, in the catalog's ranking order.
    AmbiguousMatch(Vec<CatalogItem>),
}

impl MatchOutcome {
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousMatch(_))
    }
}

/// Classifies already-ranked candidates.
///
/// The catalog ranks its search results; this only decides cardinality. When several
/// candidates come back and the first one's title equals the query ignoring case, it wins.
pub fn resolve(query: &str, candidates: Vec<CatalogItem>) -> MatchOutcome {
    let mut candidates = candidates;
    match candidates.len() {
        0 => MatchOutcome::NoMatch,
        1 => MatchOutcome::SingleMatch(candidates.remove(0)),
        _ if titles_equal(&candidates[0].title, query) => {
            MatchOutcome::SingleMatch(candidates.swap_remove(0))
        }
        _ => MatchOutcome::AmbiguousMatch(candidates),
    }
}

fn titles_equal(title: &str, query: &str) -> bool {
    title.to_lowercase() == query.trim().to_lowercase()
}
