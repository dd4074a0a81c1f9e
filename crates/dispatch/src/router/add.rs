use crate::error::Result;
use crate::format;
use crate::reply::Reply;
use moviequeue_catalog::Catalog;

pub(super) async fn run(catalog: &dyn Catalog, imdb_url: &str) -> Result<Reply> {
    let item = catalog.add_movie(imdb_url).await?;
    log::info!("queued {:?} ({})", item.title, item.id);
    Ok(Reply::text(format::added(&item)))
}
