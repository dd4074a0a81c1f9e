use crate::{ProviderListing, StreamingLookup};
use moviequeue_protocol::{CatalogItem, ProviderResult};
use std::collections::HashMap;
use std::sync::Arc;

/// Fans out one streaming lookup per movie and merges the answers per provider.
#[derive(Clone)]
pub struct ProviderAggregator {
    lookup: Arc<dyn StreamingLookup>,
}

impl ProviderAggregator {
    pub fn new(lookup: Arc<dyn StreamingLookup>) -> Self {
        Self { lookup }
    }

    /// Returns `None` when no lookup produced a provider.
    ///
    /// Lookups run concurrently. A failed lookup is logged and skipped; it never cancels
    /// the others.
    pub async fn aggregate(&self, movies: &[CatalogItem]) -> Option<Vec<ProviderResult>> {
        let mut tasks = Vec::with_capacity(movies.len());
        for movie in movies {
            let lookup = Arc::clone(&self.lookup);
            let title = movie.title.clone();
            let year = movie.year;
            let task = tokio::spawn(async move { lookup.lookup(&title, year).await });
            tasks.push((movie.title.as_str(), task));
        }

        let mut responses = Vec::with_capacity(tasks.len());
        for (title, task) in tasks {
            match task.await {
                Ok(Ok(Some(listings))) => responses.push(listings),
                Ok(Ok(None)) => log::debug!("{title:?} is unknown to the streaming resolver"),
                Ok(Err(e)) => log::error!("streaming lookup for {title:?} failed: {e}"),
                Err(e) => log::error!("streaming lookup for {title:?} panicked: {e}"),
            }
        }

        let merged = merge(responses);
        if merged.is_empty() {
            None
        } else {
            Some(merged)
        }
    }
}

/// Merges responses by provider name, keeping first-seen order for providers and movies.
fn merge(responses: Vec<Vec<ProviderListing>>) -> Vec<ProviderResult> {
    let mut providers: Vec<ProviderResult> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for listing in responses.into_iter().flatten() {
        let slot = *index.entry(listing.name.clone()).or_insert_with(|| {
            providers.push(ProviderResult::new(listing.name.clone()));
            providers.len() - 1
        });
        for movie in listing.movies {
            providers[slot].insert(movie);
        }
    }

    providers.retain(|provider| !provider.is_empty());
    providers
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviequeue_protocol::ProviderMovie;

    fn listing(name: &str, ids: &[i64]) -> ProviderListing {
        ProviderListing {
            name: name.to_string(),
            movies: ids
                .iter()
                .map(|id| ProviderMovie {
                    id: *id,
                    title: format!("movie {id}"),
                    year: None,
                    kind: None,
                })
                .collect(),
        }
    }

    #[test]
    fn merge_keeps_first_seen_order() {
        let merged = merge(vec![
            vec![listing("Prime", &[2]), listing("Netflix", &[1])],
            vec![listing("Netflix", &[3, 1])],
        ]);

        let names: Vec<&str> = merged.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Prime", "Netflix"]);
        let netflix: Vec<i64> = merged[1].movies().iter().map(|m| m.id).collect();
        assert_eq!(netflix, vec![1, 3]);
    }

    #[test]
    fn merge_drops_providers_without_movies() {
        assert!(merge(vec![vec![listing("Netflix", &[])]]).is_empty());
        assert!(merge(Vec::new()).is_empty());
    }
}
