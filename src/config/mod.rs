use std::path::PathBuf;

use crate::types::{KeySource, PageWindow, S3Credentials, SizeFilter};

pub mod args;
pub mod profile;

#[derive(Debug, Clone)]
pub struct Config {
    pub client_config: ClientConfig,
    pub tracing_config: Option<TracingConfig>,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListBucket {
        name: Option<String>,
    },
    ListObject {
        bucket: String,
        prefix: String,
        filter: SizeFilter,
        window: PageWindow,
    },
    GetObject {
        bucket: String,
        key: String,
        output: PathBuf,
    },
    PutObject {
        bucket: String,
        key: String,
        file: PathBuf,
    },
    DeleteObject {
        bucket: String,
        keys: KeySource,
        confirm: bool,
    },
}

impl Command {
    pub fn is_transfer(&self) -> bool {
        matches!(self, Command::GetObject { .. } | Command::PutObject { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credential: S3Credentials,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub tracing_level: log::Level,
    pub json_tracing: bool,
    pub aws_sdk_tracing: bool,
    pub span_events_tracing: bool,
    pub disable_color_tracing: bool,
}
