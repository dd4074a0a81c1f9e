use crate::wire::{AddMovieRequest, MarkMovieRequest, MovieResponse, MoviesResponse, QueueResponse};
use crate::Catalog;
use async_trait::async_trait;
use moviequeue_protocol::{CatalogItem, MovieStatus, QueueId, UpstreamError, UpstreamResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://api.tim-api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the movie queue service.
#[derive(Clone)]
pub struct TimApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl TimApi {
    /// Builds a client. Without a token only read calls are possible; mutations fail with
    /// [`UpstreamError::MissingCredential`].
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| UpstreamError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn require_token(&self) -> UpstreamResult<()> {
        if self.token.is_none() {
            return Err(UpstreamError::MissingCredential("API_TOKEN"));
        }
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> UpstreamResult<T> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::debug!("catalog answered {status}: {detail}");
            return Err(UpstreamError::from_status(status.as_u16(), detail));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Transport(format!("failed to decode response: {e}")))
    }
}

#[async_trait]
impl Catalog for TimApi {
    async fn add_movie(&self, imdb_url: &str) -> UpstreamResult<CatalogItem> {
        self.require_token()?;
        let request = self
            .client
            .post(self.url("movie"))
            .json(&AddMovieRequest { url: imdb_url });
        let movie: MovieResponse = self.send(request).await?;
        Ok(movie.into())
    }

    async fn search(
        &self,
        query: &str,
        status: Option<MovieStatus>,
    ) -> UpstreamResult<Vec<CatalogItem>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(status) = status {
            params.push(("status", status.as_str().to_string()));
        }

        let request = self.client.get(self.url("movie")).query(&params);
        let response: MoviesResponse = self.send(request).await?;
        Ok(response.movies.into_iter().map(Into::into).collect())
    }

    async fn mark(&self, id: &QueueId, status: MovieStatus) -> UpstreamResult<CatalogItem> {
        self.require_token()?;
        let request = self
            .client
            .delete(self.url(&format!("queue/{id}")))
            .json(&MarkMovieRequest { status });
        let movie: MovieResponse = self.send(request).await?;
        Ok(movie.into())
    }

    async fn queued(&self, limit: Option<usize>) -> UpstreamResult<Vec<CatalogItem>> {
        let mut request = self.client.get(self.url("queue"));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        let response: QueueResponse = self.send(request).await?;
        Ok(response.queue.into_iter().map(Into::into).collect())
    }
}
