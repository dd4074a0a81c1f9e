use moviequeue_protocol::CatalogItem;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32String};

/// Ranks catalog items by fuzzy title match using nucleo-matcher
pub struct FuzzyRanker {
    matcher: Matcher,
}

impl FuzzyRanker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Returns `(item_index, score)` for every matching item.
    /// Exact (case-insensitive) title hits come first, then score descending.
    pub fn rank(&mut self, query: &str, items: &[CatalogItem]) -> Vec<(usize, u32)> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);

        let mut scored: Vec<(usize, u32, bool)> = items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                let exact = item.title.to_lowercase() == query.to_lowercase();
                let haystack = Utf32String::from(item.title.as_str());
                let score = pattern.score(haystack.slice(..), &mut self.matcher)?;
                Some((idx, score, exact))
            })
            .collect();

        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| b.1.cmp(&a.1)));

        scored
            .into_iter()
            .map(|(idx, score, _)| (idx, score))
            .collect()
    }

    /// Clones the matching items in ranked order.
    pub fn rank_items(&mut self, query: &str, items: &[CatalogItem]) -> Vec<CatalogItem> {
        self.rank(query, items)
            .into_iter()
            .map(|(idx, _)| items[idx].clone())
            .collect()
    }
}

impl Default for FuzzyRanker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(titles: &[&str]) -> Vec<CatalogItem> {
        titles
            .iter()
            .enumerate()
            .map(|(idx, title)| CatalogItem::new(idx.to_string(), *title, Some(2000)))
            .collect()
    }

    #[test]
    fn test_exact_title_is_ranked_first() {
        let mut ranker = FuzzyRanker::new();
        let catalog = items(&["Matrix Reloaded", "Heat", "Matrix"]);

        let ranked = ranker.rank("matrix", &catalog);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, 2);
        assert_eq!(ranked[1].0, 0);
    }

    #[test]
    fn test_non_matching_titles_are_dropped() {
        let mut ranker = FuzzyRanker::new();
        let catalog = items(&["Alien", "Heat"]);

        assert!(ranker.rank("zzz", &catalog).is_empty());
    }

    #[test]
    fn test_typo_tolerance() {
        let mut ranker = FuzzyRanker::new();
        let catalog = items(&["The Shawshank Redemption"]);

        // subsequence match still hits
        let ranked = ranker.rank("shawshnk", &catalog);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let mut ranker = FuzzyRanker::new();
        assert!(ranker.rank("   ", &items(&["Heat"])).is_empty());
    }
}
