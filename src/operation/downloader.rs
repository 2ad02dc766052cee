use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::storage::Store;
use crate::types::error::S3cliError;

/// Writes the object `key` to `output`, replacing any existing file once the
/// object has been opened.
///
/// Returns the number of bytes written, which always equals the content
/// length declared by the store. A shorter or longer body is reported as
/// [`S3cliError::TransferIntegrity`].
pub async fn download(
    store: &Store,
    bucket: &str,
    key: &str,
    output: &Path,
    progress: &ProgressBar,
) -> Result<u64> {
    // An existing file is only replaced once the object can be read.
    let object = store.get_object(bucket, key).await?;

    let mut file = tokio::fs::File::create(output)
        .await
        .with_context(|| format!("failed to create {}", output.display()))?;
    progress.set_length(object.content_length);

    let mut buf_reader = BufReader::new(object.body);
    let mut written: u64 = 0;
    loop {
        let buffer = buf_reader.fill_buf().await?;
        if buffer.is_empty() {
            break;
        }

        let buffer_len = buffer.len();
        file.write_all(buffer).await?;
        buf_reader.consume(buffer_len);

        written += buffer_len as u64;
        progress.inc(buffer_len as u64);
    }

    file.flush().await?;

    if written != object.content_length {
        return Err(S3cliError::TransferIntegrity {
            expected: object.content_length,
            actual: written,
        }
        .into());
    }

    let path = output.display().to_string();
    debug!(key = key, path = path, size = written, "object written.");
    info!(bucket = bucket, key = key, size = written, "download completed.");

    Ok(written)
}
