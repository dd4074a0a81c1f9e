use crate::{ProviderListing, StreamingLookup};
use async_trait::async_trait;
use moviequeue_protocol::{UpstreamError, UpstreamResult};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_WOSTREAM_BASE_URL: &str = "http://streamingprovider-resolver";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct SearchRequest<'a> {
    title: &'a str,
    year: Option<u16>,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<ProviderListing>,
}

/// HTTP client for the streaming provider resolver.
#[derive(Clone)]
pub struct WostreamClient {
    client: Client,
    search_url: String,
}

impl WostreamClient {
    pub fn new(base_url: &str) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| UpstreamError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl StreamingLookup for WostreamClient {
    async fn lookup(
        &self,
        title: &str,
        year: Option<u16>,
    ) -> UpstreamResult<Option<Vec<ProviderListing>>> {
        let response = self
            .client
            .post(&self.search_url)
            .json(&SearchRequest { title, year })
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::debug!("no streaming providers known for {title:?}");
            return Ok(None);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(UpstreamError::from_status(status.as_u16(), detail));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Transport(format!("failed to decode response: {e}")))?;
        Ok(Some(body.results))
    }
}
