// Walks a search query's result pages to exhaustion, collecting item
// identifiers. Strictly sequential: one query, one page at a time.

use tokio::time::{Duration, sleep};

use crate::client::MarketApi;

/// Collects every item identifier the search endpoint returns for
/// `query`, advancing the offset by `page_size` per page.
///
/// Pagination stops on the first non-success status, on a body without a
/// `results` array, or after a page shorter than `page_size` (that page
/// is still included). Failures truncate: identifiers gathered so far
/// are returned, never discarded. A fixed delay separates successive
/// full pages; the terminal page incurs none.
pub async fn collect_item_ids(api: &MarketApi, query: &str, page_size: usize) -> Vec<String> {
    let mut ids = Vec::new();
    let mut offset = 0;
    let delay = Duration::from_millis(api.settings().page_delay_ms);

    loop {
        let page = match api.search_page(query, page_size, offset).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(query, offset, error = %e, "search request failed, stopping pagination");
                break;
            }
        };

        let Some(results) = page.get("results").and_then(|v| v.as_array()) else {
            tracing::warn!(query, offset, "no results field in search response");
            break;
        };

        for entry in results {
            match entry.get("id").and_then(|v| v.as_str()) {
                Some(id) => ids.push(id.to_string()),
                None => tracing::warn!(query, offset, "search result entry without an id, skipping"),
            }
        }

        // A short page is the last page.
        if results.len() < page_size {
            break;
        }

        offset += page_size;
        sleep(delay).await;
    }

    tracing::info!(query, count = ids.len(), "pagination complete");
    ids
}
