/*!
# Overview
s3cli is a simple command line client for S3 and S3-compatible object storage.
It lists buckets and objects, downloads and uploads objects with a progress bar,
and deletes objects in batches.

## Features
- Paginated listing
  `list-object` walks the whole listing of a bucket page by page and returns only
  the requested page (`--page`, `--pagesize`) of the objects that pass the filters.

- Filtering
  - key prefix (`--prefix`)
  - key extension (`--ext`)
  - object size with human-readable units (`--minsize 10KB`, `--maxsize 1.5MB`)

- Safe batch deletion
  `delete-object` only shows the keys to be deleted unless `--confirm` is given.

- Multiple environments
  Endpoints and credentials are read from the environment sections of `s3cli.json`
  and selected with `--env`.

## As a library
s3cli CLI is a very thin wrapper of the s3cli library.
Every command is an async function in [`operation`] that takes the store explicitly.

Example usage
=============

```no_run
use indicatif::ProgressBar;

use s3cli::config::Command;
use s3cli::config::args::build_config_from_args;
use s3cli::operation::{downloader, object_lister};
use s3cli::storage::s3::S3Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = vec!["program_name", "--env", "default", "list-object", "my-bucket"];
    let config = build_config_from_args(args).map_err(anyhow::Error::msg)?;

    let store = S3Store::boxed_new(&config.client_config).await;

    if let Command::ListObject { bucket, prefix, filter, window } = &config.command {
        for object in object_lister::list_objects(&store, bucket, prefix, filter, *window).await? {
            println!("{} {}", object.key, object.size);
        }
    }

    let written = downloader::download(
        &store,
        "my-bucket",
        "dir/data.bin",
        std::path::Path::new("./data.bin"),
        &ProgressBar::hidden(),
    )
    .await?;
    println!("{written} bytes downloaded");

    Ok(())
}
```

For more information about s3cli binary,
=============
see the source code of `src/bin/s3cli`.
*/

pub use config::Config;
pub use config::args::CLIArgs;

pub mod config;
pub mod operation;
pub mod storage;
pub mod types;
