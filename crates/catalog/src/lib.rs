//! # Movie Queue Catalog
//!
//! The remote movie queue is the source of truth for every movie and its status. This crate
//! exposes it behind the [`Catalog`] trait with two implementations:
//!
//! - [`TimApi`] talks HTTP to the queue service
//! - [`InMemoryCatalog`] keeps a local list, fuzzy-ranked like the service does

mod http;
mod memory;
mod wire;

use async_trait::async_trait;
use moviequeue_protocol::{CatalogItem, MovieStatus, QueueId, UpstreamResult};

pub use http::{TimApi, DEFAULT_API_BASE_URL};
pub use memory::InMemoryCatalog;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Adds the movie behind an IMDb link to the queue.
    async fn add_movie(&self, imdb_url: &str) -> UpstreamResult<CatalogItem>;

    /// Fuzzy search, best match first, optionally restricted to one status.
    async fn search(
        &self,
        query: &str,
        status: Option<MovieStatus>,
    ) -> UpstreamResult<Vec<CatalogItem>>;

    /// Moves a queued movie to `Watched` or `Deleted`.
    async fn mark(&self, id: &QueueId, status: MovieStatus) -> UpstreamResult<CatalogItem>;

    /// Queued movies in queue order.
    async fn queued(&self, limit: Option<usize>) -> UpstreamResult<Vec<CatalogItem>>;
}
