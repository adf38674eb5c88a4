// Resolves item identifiers to detail records across a bounded pool of
// concurrent workers.

use futures::{StreamExt, stream};

use crate::{client::MarketApi, error::ScrapeError, models::ItemRecord};

/// Fetches the detail record for every identifier in `ids`, at most
/// `concurrency` requests in flight at once.
///
/// Records are collected in completion order. An identifier whose fetch
/// or extraction fails is logged and dropped; the batch continues. No
/// retry, no per-request timeout beyond the transport's own. The output
/// holds at most one record per submitted identifier.
pub async fn fetch_all(api: &MarketApi, ids: &[String], concurrency: usize) -> Vec<ItemRecord> {
    let records: Vec<ItemRecord> = stream::iter(ids)
        .map(|id| async move {
            match fetch_one(api, id).await {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(item_id = %id, error = %e, "dropping item");
                    None
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .filter_map(|record| async move { record })
        .collect()
        .await;

    tracing::info!(
        submitted = ids.len(),
        fetched = records.len(),
        "detail fetch complete"
    );
    records
}

async fn fetch_one(api: &MarketApi, id: &str) -> Result<ItemRecord, ScrapeError> {
    let detail = api.item_detail(id).await?;
    ItemRecord::from_detail(&detail)
}
