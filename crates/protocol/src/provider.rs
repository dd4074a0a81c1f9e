use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A movie as reported by the streaming lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// A streaming provider and the distinct movies it offers.
///
/// Movies are unique by `id`; insertion order is kept so rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResult {
    pub name: String,
    movies: Vec<ProviderMovie>,
    #[serde(skip)]
    seen: HashSet<i64>,
}

impl ProviderResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            movies: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds a movie unless one with the same id is already listed. Returns whether it was added.
    pub fn insert(&mut self, movie: ProviderMovie) -> bool {
        if !self.seen.insert(movie.id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    pub fn movies(&self) -> &[ProviderMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str) -> ProviderMovie {
        ProviderMovie {
            id,
            title: title.to_string(),
            year: Some(1999),
            kind: Some("movie".to_string()),
        }
    }

    #[test]
    fn insert_deduplicates_by_id() {
        let mut provider = ProviderResult::new("Netflix");
        assert!(provider.insert(movie(1, "Matrix")));
        assert!(!provider.insert(movie(1, "The Matrix")));
        assert!(provider.insert(movie(2, "Alien")));

        assert_eq!(provider.len(), 2);
        assert_eq!(provider.movies()[0].title, "Matrix");
    }

    #[test]
    fn movie_decodes_wire_type_field() {
        let movie: ProviderMovie =
            serde_json::from_str(r#"{"id":7,"title":"Heat","year":1995,"type":"movie"}"#).unwrap();
        assert_eq!(movie.kind.as_deref(), Some("movie"));
        assert_eq!(movie.year, Some(1995));
    }
}
