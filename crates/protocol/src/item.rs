use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque queue identifier assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(pub String);

impl QueueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueueId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Queue status, owned by the catalog and never changed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovieStatus {
    Queued,
    Watched,
    Deleted,
}

impl MovieStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Watched => "Watched",
            Self::Deleted => "Deleted",
        }
    }

    /// Participle used in confirmations ("marked as watched").
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Watched => "watched",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie as known to the catalog. Read-only snapshot fetched per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: QueueId,
    pub title: String,
    pub year: Option<u16>,
    pub status: MovieStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id: QueueId(id.into()),
            title: title.into(),
            year,
            status: MovieStatus::Queued,
            imdb_id: None,
            rating: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: MovieStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_imdb(mut self, imdb_id: impl Into<String>, rating: Option<String>) -> Self {
        self.imdb_id = Some(imdb_id.into());
        self.rating = rating;
        self
    }

    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .map(|id| format!("https://www.imdb.com/title/{id}/"))
    }
}
