use anyhow::Result;
use tracing::debug;

use crate::storage::Store;
use crate::types::BucketSummary;

/// Lists every bucket, keeping only those whose name contains `name_filter` when given.
pub async fn list_buckets(store: &Store, name_filter: Option<&str>) -> Result<Vec<BucketSummary>> {
    let buckets = store.list_buckets().await?;
    let total = buckets.len();

    let buckets: Vec<BucketSummary> = match name_filter {
        Some(name_filter) => buckets
            .into_iter()
            .filter(|bucket| bucket.name.contains(name_filter))
            .collect(),
        None => buckets,
    };

    debug!(
        name_filter = name_filter,
        total = total,
        matched = buckets.len(),
        "buckets listed."
    );

    Ok(buckets)
}
