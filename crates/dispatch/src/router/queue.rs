use crate::error::Result;
use crate::format;
use crate::reply::Reply;
use moviequeue_catalog::Catalog;

pub(super) async fn run(catalog: &dyn Catalog) -> Result<Reply> {
    let items = catalog.queued(None).await?;
    Ok(Reply::text(format::queue(&items)))
}
