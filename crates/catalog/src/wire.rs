use moviequeue_protocol::{CatalogItem, MovieStatus, QueueId};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct AddMovieRequest<'a> {
    #[serde(rename = "imdbUrl")]
    pub url: &'a str,
}

#[derive(Serialize)]
pub(crate) struct MarkMovieRequest {
    pub status: MovieStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieResponse {
    pub id: String,
    pub status: MovieStatus,
    pub imdb: ImdbMovie,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImdbMovie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoviesResponse {
    pub movies: Vec<MovieResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueueResponse {
    pub queue: Vec<MovieResponse>,
}

impl From<MovieResponse> for CatalogItem {
    fn from(value: MovieResponse) -> Self {
        let rating = value.imdb.rating.filter(|r| !r.trim().is_empty());
        CatalogItem {
            id: QueueId(value.id),
            title: value.imdb.title,
            year: value.imdb.year,
            status: value.status,
            imdb_id: Some(value.imdb.id),
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn movie_response_decodes_into_catalog_item() {
        let raw = r#"{
            "id": "9f1c",
            "status": "Queued",
            "imdb": {
                "id": "tt0133093",
                "title": "The Matrix",
                "year": 1999,
                "rating": "8.7",
                "cover": {"url": "https://example.invalid/cover.jpg", "ratio": 0.67}
            }
        }"#;

        let movie: MovieResponse = serde_json::from_str(raw).unwrap();
        let item = CatalogItem::from(movie);

        assert_eq!(item.id, QueueId::from("9f1c"));
        assert_eq!(item.title, "The Matrix");
        assert_eq!(item.year, Some(1999));
        assert_eq!(item.status, MovieStatus::Queued);
        assert_eq!(
            item.imdb_url().as_deref(),
            Some("https://www.imdb.com/title/tt0133093/")
        );
        assert_eq!(item.rating.as_deref(), Some("8.7"));
    }

    #[test]
    fn add_request_uses_camel_case_field() {
        let body = serde_json::to_string(&AddMovieRequest {
            url: "https://www.imdb.com/title/tt0113277/",
        })
        .unwrap();
        assert_eq!(body, r#"{"imdbUrl":"https://www.imdb.com/title/tt0113277/"}"#);
    }
}
