//! # Movie Queue Providers
//!
//! Finds out where queued movies can be streamed.
//!
//! ```text
//! [m1, m2, m3]
//!     │ one lookup task per movie
//!     ├──> m1: Netflix{1}
//!     ├──> m2: not found
//!     └──> m3: Netflix{1}, Prime{2}
//!            │ merge by provider name, dedupe by movie id
//!            └─> [Netflix{1}, Prime{2}]
//! ```

mod aggregate;
mod client;

use async_trait::async_trait;
use moviequeue_protocol::{ProviderMovie, UpstreamResult};
use serde::Deserialize;

pub use aggregate::ProviderAggregator;
pub use client::{WostreamClient, DEFAULT_WOSTREAM_BASE_URL};

/// One provider entry of a lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderListing {
    pub name: String,
    pub movies: Vec<ProviderMovie>,
}

#[async_trait]
pub trait StreamingLookup: Send + Sync {
    /// `Ok(None)` means the service does not know the movie; that is not an error.
    async fn lookup(
        &self,
        title: &str,
        year: Option<u16>,
    ) -> UpstreamResult<Option<Vec<ProviderListing>>>;
}
