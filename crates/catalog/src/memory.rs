use crate::Catalog;
use async_trait::async_trait;
use moviequeue_protocol::{CatalogItem, MovieStatus, QueueId, UpstreamError, UpstreamResult};
use moviequeue_search::FuzzyRanker;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-process catalog. Search results are ranked with [`FuzzyRanker`] so callers see the
/// same best-first ordering the queue service produces.
#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    items: Vec<CatalogItem>,
    /// IMDb id -> (title, year) for movies `add_movie` may resolve
    known: HashMap<String, (String, Option<u16>)>,
    mutations: Vec<(QueueId, MovieStatus)>,
    next_id: usize,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let catalog = Self::new();
        {
            let mut state = catalog.lock();
            state.items.extend(items);
            state.next_id = state.items.len();
        }
        catalog
    }

    /// Registers an IMDb id so that `add_movie` can resolve links to it.
    #[must_use]
    pub fn with_known_movie(self, imdb_id: &str, title: &str, year: Option<u16>) -> Self {
        self.lock()
            .known
            .insert(imdb_id.to_string(), (title.to_string(), year));
        self
    }

    /// Every `mark` call that succeeded, in order.
    pub fn mutations(&self) -> Vec<(QueueId, MovieStatus)> {
        self.lock().mutations.clone()
    }

    pub fn items(&self) -> Vec<CatalogItem> {
        self.lock().items.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn imdb_id_from_url(url: &str) -> Option<&str> {
    url.split(['/', '?']).find(|segment| {
        segment
            .strip_prefix("tt")
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
    })
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn add_movie(&self, imdb_url: &str) -> UpstreamResult<CatalogItem> {
        let imdb_id = imdb_id_from_url(imdb_url).ok_or_else(|| UpstreamError::UnexpectedStatus {
            status: 400,
            detail: format!("not an imdb link: {imdb_url}"),
        })?;

        let mut state = self.lock();
        if state
            .items
            .iter()
            .any(|item| item.imdb_id.as_deref() == Some(imdb_id) && item.status == MovieStatus::Queued)
        {
            return Err(UpstreamError::Conflict(format!("{imdb_id} is already queued")));
        }

        let (title, year) = state.known.get(imdb_id).cloned().ok_or_else(|| {
            UpstreamError::UnexpectedStatus {
                status: 404,
                detail: format!("unknown imdb id {imdb_id}"),
            }
        })?;

        state.next_id += 1;
        let item = CatalogItem::new(format!("q{}", state.next_id), title, year)
            .with_imdb(imdb_id, None);
        state.items.push(item.clone());
        Ok(item)
    }

    async fn search(
        &self,
        query: &str,
        status: Option<MovieStatus>,
    ) -> UpstreamResult<Vec<CatalogItem>> {
        let state = self.lock();
        let pool: Vec<CatalogItem> = state
            .items
            .iter()
            .filter(|item| status.map_or(true, |s| item.status == s))
            .cloned()
            .collect();
        drop(state);

        Ok(FuzzyRanker::new().rank_items(query, &pool))
    }

    async fn mark(&self, id: &QueueId, status: MovieStatus) -> UpstreamResult<CatalogItem> {
        let mut state = self.lock();
        let item = state
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| UpstreamError::UnexpectedStatus {
                status: 404,
                detail: format!("no queue entry {id}"),
            })?;

        if item.status != MovieStatus::Queued {
            return Err(UpstreamError::Conflict(format!(
                "{} is already {}",
                item.title,
                item.status.past_tense()
            )));
        }

        item.status = status;
        let updated = item.clone();
        state.mutations.push((id.clone(), status));
        Ok(updated)
    }

    async fn queued(&self, limit: Option<usize>) -> UpstreamResult<Vec<CatalogItem>> {
        let state = self.lock();
        let queued = state
            .items
            .iter()
            .filter(|item| item.status == MovieStatus::Queued)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(queued)
    }
}
