use anyhow::Result;
use tokio::time::Instant;
use tracing::{error, info, trace};

use s3cli::Config;
use s3cli::config::Command;
use s3cli::operation::{bucket_lister, deleter, downloader, object_lister, uploader};
use s3cli::storage::Store;
use s3cli::storage::s3::S3Store;

mod indicator;
mod table;
mod ui_config;

pub const EXIT_CODE_ERROR: i32 = 1;

pub async fn run(config: Config) -> Result<()> {
    let start_time = Instant::now();
    trace!("s3cli start.");

    let store = S3Store::boxed_new(&config.client_config).await;
    let result = run_command(&store, &config).await;

    let duration_sec = format!("{:.3}", start_time.elapsed().as_secs_f32());
    if let Err(e) = &result {
        error!(duration_sec = duration_sec, "{e:#}");
        return result;
    }

    trace!(duration_sec = duration_sec, "s3cli has been completed.");
    Ok(())
}

async fn run_command(store: &Store, config: &Config) -> Result<()> {
    let show_progress = ui_config::is_progress_indicator_needed(config);

    match &config.command {
        Command::ListBucket { name } => {
            let buckets = bucket_lister::list_buckets(store, name.as_deref()).await?;
            print!("{}", table::render_buckets(&buckets));
        }
        Command::ListObject {
            bucket,
            prefix,
            filter,
            window,
        } => {
            let objects =
                object_lister::list_objects(store, bucket, prefix, filter, *window).await?;
            print!("{}", table::render_objects(&objects));
        }
        Command::GetObject {
            bucket,
            key,
            output,
        } => {
            let start_time = Instant::now();
            let progress_bar = indicator::create_transfer_indicator("get-object", key, show_progress);

            let written = downloader::download(store, bucket, key, output, &progress_bar).await;
            match written {
                Ok(written) => {
                    indicator::finish_transfer_indicator(&progress_bar, written, start_time)
                }
                Err(e) => {
                    progress_bar.abandon();
                    return Err(e);
                }
            }
        }
        Command::PutObject { bucket, key, file } => {
            let start_time = Instant::now();
            let progress_bar = indicator::create_transfer_indicator("put-object", key, show_progress);

            let uploaded = uploader::upload(store, bucket, key, file, &progress_bar).await;
            match uploaded {
                Ok(uploaded) => {
                    indicator::finish_transfer_indicator(&progress_bar, uploaded, start_time)
                }
                Err(e) => {
                    progress_bar.abandon();
                    return Err(e);
                }
            }
        }
        Command::DeleteObject {
            bucket,
            keys,
            confirm,
        } => {
            let keys = deleter::resolve_keys(keys).await?;
            let deleted = deleter::delete_objects(store, bucket, &keys, *confirm).await?;
            info!(bucket = bucket, deleted = deleted, "delete-object completed.");
        }
    }

    Ok(())
}
