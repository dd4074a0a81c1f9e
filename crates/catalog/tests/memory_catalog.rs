use moviequeue_catalog::{Catalog, InMemoryCatalog};
use moviequeue_protocol::{CatalogItem, MovieStatus, QueueId, UpstreamError};
use pretty_assertions::assert_eq;

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_items(vec![
        CatalogItem::new("q1", "Matrix Reloaded", Some(2003)),
        CatalogItem::new("q2", "Matrix", Some(1999)),
        CatalogItem::new("q3", "Heat", Some(1995)).with_status(MovieStatus::Watched),
    ])
    .with_known_movie("tt0078748", "Alien", Some(1979))
}

#[tokio::test]
async fn search_filters_by_status_and_ranks_exact_first() {
    let catalog = catalog();

    let queued = catalog
        .search("matrix", Some(MovieStatus::Queued))
        .await
        .unwrap();
    let ids: Vec<&str> = queued.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["q2", "q1"]);

    assert!(catalog
        .search("heat", Some(MovieStatus::Queued))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(catalog.search("heat", None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn mark_records_mutation_and_rejects_repeats() {
    let catalog = catalog();
    let id = QueueId::from("q2");

    let updated = catalog.mark(&id, MovieStatus::Watched).await.unwrap();
    assert_eq!(updated.status, MovieStatus::Watched);
    assert_eq!(catalog.mutations(), vec![(id.clone(), MovieStatus::Watched)]);

    let err = catalog.mark(&id, MovieStatus::Deleted).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Conflict(_)));
}

#[tokio::test]
async fn add_movie_resolves_known_links_once() {
    let catalog = catalog();

    let added = catalog
        .add_movie("https://www.imdb.com/title/tt0078748/")
        .await
        .unwrap();
    assert_eq!(added.title, "Alien");
    assert_eq!(added.status, MovieStatus::Queued);

    let err = catalog
        .add_movie("https://www.imdb.com/title/tt0078748/")
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Conflict(_)));

    assert_eq!(catalog.queued(None).await.unwrap().len(), 3);
    assert_eq!(catalog.queued(Some(1)).await.unwrap().len(), 1);
}
