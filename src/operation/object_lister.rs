use anyhow::Result;
use tracing::{debug, trace};

use crate::storage::Store;
use crate::types::{ObjectSummary, PageWindow, SizeFilter};

/// Walks the listing of `bucket` under `prefix` and returns the objects that
/// pass `filter` and fall into `window`.
///
/// The window is evaluated against the index among matching objects, so
/// filtered out objects never take a slot. The walk stops as soon as the window
/// is full or the remote listing is exhausted.
pub async fn list_objects(
    store: &Store,
    bucket: &str,
    prefix: &str,
    filter: &SizeFilter,
    window: PageWindow,
) -> Result<Vec<ObjectSummary>> {
    let max_keys = i32::try_from(window.page_size())?;

    let mut objects = Vec::new();
    let mut marker: Option<String> = None;
    let mut index: u64 = 0;

    loop {
        let listed = store
            .list_objects(bucket, prefix, marker.as_deref(), max_keys)
            .await?;

        trace!(
            bucket = bucket,
            marker = marker.as_deref(),
            count = listed.len(),
            "listing page fetched."
        );

        for object in &listed {
            if !filter.is_match(object) {
                continue;
            }

            if window.contains(index) {
                objects.push(object.clone());
            }

            index += 1;
            if window.end_index() <= index {
                debug!(
                    page = window.page(),
                    count = objects.len(),
                    "page window filled."
                );
                return Ok(objects);
            }
        }

        if (listed.len() as u64) < window.page_size() {
            break;
        }

        marker = listed.last().map(|object| object.key.clone());
    }

    debug!(
        page = window.page(),
        count = objects.len(),
        matched = index,
        "listing exhausted."
    );

    Ok(objects)
}
