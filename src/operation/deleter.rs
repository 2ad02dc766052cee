use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::storage::Store;
use crate::types::{DeleteRequest, KeySource};

const KEY_SEPARATOR: char = ',';

/// Expands a [`KeySource`] into the keys to delete, in the given order.
///
/// Lines of a key file are trimmed. Blank entries are kept as empty keys so
/// that [`delete_objects`] can report them.
pub async fn resolve_keys(keys: &KeySource) -> Result<Vec<String>> {
    match keys {
        KeySource::List(list) => Ok(list.split(KEY_SEPARATOR).map(str::to_string).collect()),
        KeySource::File(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(content
                .lines()
                .map(|line| line.trim().to_string())
                .collect())
        }
    }
}

/// Announces every key and, only when `confirmed`, deletes them one by one.
///
/// Returns the number of delete requests issued. The first failed request
/// aborts the rest of the batch.
pub async fn delete_objects(
    store: &Store,
    bucket: &str,
    keys: &[String],
    confirmed: bool,
) -> Result<usize> {
    let mut deleted = 0;

    for key in keys {
        let request = DeleteRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            confirmed,
        };

        if delete(store, &request).await? {
            deleted += 1;
        }
    }

    if !confirmed {
        warn!(
            bucket = bucket,
            count = keys.len(),
            "nothing deleted. add --confirm to delete the objects above."
        );
    }

    Ok(deleted)
}

async fn delete(store: &Store, request: &DeleteRequest) -> Result<bool> {
    if request.key.is_empty() {
        warn!(bucket = request.bucket, "empty key skipped.");
        return Ok(false);
    }

    info!(
        bucket = request.bucket,
        key = request.key,
        confirmed = request.confirmed,
        "delete {}",
        request.key
    );

    if !request.confirmed {
        return Ok(false);
    }

    store.delete_object(&request.bucket, &request.key).await?;

    Ok(true)
}
