use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info;

use crate::storage::Store;
use crate::types::async_progress::AsyncReadWithProgress;

/// Uploads `file` as the object `key` in a single put request.
pub async fn upload(
    store: &Store,
    bucket: &str,
    key: &str,
    file: &Path,
    progress: &ProgressBar,
) -> Result<u64> {
    let source = tokio::fs::File::open(file)
        .await
        .with_context(|| format!("failed to open {}", file.display()))?;
    let content_length = source
        .metadata()
        .await
        .with_context(|| format!("failed to stat {}", file.display()))?
        .len();

    progress.set_length(content_length);
    let body = Box::pin(AsyncReadWithProgress::new(source, progress.clone()));

    store.put_object(bucket, key, body, content_length).await?;

    info!(
        bucket = bucket,
        key = key,
        size = content_length,
        "upload completed."
    );

    Ok(content_length)
}
