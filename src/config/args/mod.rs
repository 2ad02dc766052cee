use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
#[cfg(feature = "version")]
use shadow_rs::shadow;

use crate::Config;
use crate::config::args::value_parser::{file_exist, human_size};
use crate::config::{Command, TracingConfig, profile};
use crate::types::{KeySource, PageWindow, SizeFilter};

mod value_parser;

const DEFAULT_ENV: &str = "default";
const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PAGE_SIZE: u64 = 20;
// S3 never returns more than 1000 keys in one listing request.
const MAX_PAGE_SIZE: u64 = 1000;
const DEFAULT_JSON_TRACING: bool = false;
const DEFAULT_AWS_SDK_TRACING: bool = false;
const DEFAULT_SPAN_EVENTS_TRACING: bool = false;
const DEFAULT_DISABLE_COLOR_TRACING: bool = false;
const DEFAULT_CONFIRM: bool = false;

const MIN_SIZE_GREATER_THAN_MAX_SIZE: &str = "--minsize must be smaller than or equal to --maxsize\n";

#[cfg(feature = "version")]
shadow!(build);

/// s3cli is a CLI for S3 API.
/// You can use it to list buckets, list and manage your objects.
#[derive(Parser, Clone, Debug)]
#[command(name = "s3cli", about = "Another simple s3 client tool")]
#[cfg_attr(feature = "version", command(version=format!("{} ({} {}), {}", build::PKG_VERSION, build::SHORT_COMMIT, build::BUILD_TARGET, build::RUST_VERSION)))]
pub struct CLIArgs {
    #[command(subcommand)]
    command: Commands,

    /// config file (default is $HOME/s3cli.json or ./s3cli.json)
    #[arg(long, env = "S3CLI_CONFIG", global = true, value_name = "FILE", help_heading = "General")]
    config: Option<PathBuf>,

    /// the env configuration
    #[arg(long, env = "S3CLI_ENV", global = true, default_value = DEFAULT_ENV, value_parser = NonEmptyStringValueParser::new(), help_heading = "General")]
    env: String,

    /// page to list items
    #[arg(long, env = "S3CLI_PAGE", global = true, default_value_t = DEFAULT_PAGE, value_parser = clap::value_parser!(u64).range(1..), help_heading = "General")]
    page: u64,

    /// size of page to list items
    #[arg(long, env = "S3CLI_PAGESIZE", global = true, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u64).range(1..=MAX_PAGE_SIZE), help_heading = "General")]
    pagesize: u64,

    /// trace verbosity(-v: show info, -vv: show debug, -vvv show trace)
    #[clap(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// show trace as json format
    #[arg(long, env = "S3CLI_JSON_TRACING", global = true, default_value_t = DEFAULT_JSON_TRACING, help_heading = "Tracing/Logging")]
    json_tracing: bool,

    /// enable aws sdk tracing
    #[arg(long, env = "S3CLI_AWS_SDK_TRACING", global = true, default_value_t = DEFAULT_AWS_SDK_TRACING, help_heading = "Tracing/Logging")]
    aws_sdk_tracing: bool,

    /// show span event tracing
    #[arg(long, env = "S3CLI_SPAN_EVENTS_TRACING", global = true, default_value_t = DEFAULT_SPAN_EVENTS_TRACING, help_heading = "Tracing/Logging")]
    span_events_tracing: bool,

    /// disable ANSI terminal colors
    #[arg(long, env = "S3CLI_DISABLE_COLOR_TRACING", global = true, default_value_t = DEFAULT_DISABLE_COLOR_TRACING, help_heading = "Tracing/Logging")]
    disable_color_tracing: bool,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// list bucket with keyword, eg: s3cli list-bucket
    ListBucket {
        /// list bucket with name
        #[arg(long)]
        name: Option<String>,
    },

    /// list object with bucket and prefix, eg: s3cli list-object BUCKET
    ListObject {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        bucket: String,

        /// list objects with prefix
        #[arg(long, default_value = "")]
        prefix: String,

        /// list objects with extension
        #[arg(long)]
        ext: Option<String>,

        /// list objects with min size, eg: 10KB
        #[arg(long, value_parser = human_size::parse_human_size)]
        minsize: Option<u64>,

        /// list objects with max size, eg: 10MB
        #[arg(long, value_parser = human_size::parse_human_size)]
        maxsize: Option<u64>,
    },

    /// get object with bucket and key, eg: s3cli get-object BUCKET --key KEY
    GetObject {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        bucket: String,

        /// get object with this key
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        key: String,

        /// the output file of get object (default is the key)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// put object with bucket and a file, eg: s3cli put-object BUCKET --key KEY --file FILE
    PutObject {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        bucket: String,

        /// the object key to put
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        key: String,

        /// the file to upload
        #[arg(long, value_name = "FILE", value_parser = file_exist::is_file_exist)]
        file: PathBuf,
    },

    /// delete object with bucket and batch keys, eg: s3cli delete-object BUCKET --key KEY1,KEY2
    #[command(group(ArgGroup::new("keys").required(true).args(["key", "file"])))]
    DeleteObject {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        bucket: String,

        /// the object keys to delete, separated by commas
        #[arg(long)]
        key: Option<String>,

        /// the object keys stored in a file to delete, one key per line
        #[arg(long, value_name = "FILE", value_parser = file_exist::is_file_exist)]
        file: Option<PathBuf>,

        /// delete double confirm. without it, only the keys to be deleted are shown
        #[arg(long, default_value_t = DEFAULT_CONFIRM)]
        confirm: bool,
    },
}

pub fn parse_from_args<I, T>(args: I) -> Result<CLIArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CLIArgs::try_parse_from(args)
}

pub fn build_config_from_args<I, T>(args: I) -> Result<Config, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config_args = CLIArgs::try_parse_from(args).map_err(|e| e.to_string())?;
    crate::Config::try_from(config_args)
}

impl CLIArgs {
    fn validate_config(&self) -> Result<(), String> {
        self.check_size_range()?;

        Ok(())
    }

    fn check_size_range(&self) -> Result<(), String> {
        if let Commands::ListObject {
            minsize: Some(minsize),
            maxsize: Some(maxsize),
            ..
        } = &self.command
        {
            if 0 < *maxsize && maxsize < minsize {
                return Err(MIN_SIZE_GREATER_THAN_MAX_SIZE.to_string());
            }
        }

        Ok(())
    }

    fn build_tracing_config(&self) -> Option<TracingConfig> {
        let tracing_config = self.verbosity.log_level().map(|log_level| TracingConfig {
            tracing_level: log_level,
            json_tracing: self.json_tracing,
            aws_sdk_tracing: self.aws_sdk_tracing,
            span_events_tracing: self.span_events_tracing,
            disable_color_tracing: self.disable_color_tracing,
        });

        // The keys to be deleted are always reported.
        if !matches!(self.command, Commands::DeleteObject { .. }) {
            return tracing_config;
        }

        match tracing_config {
            None => Some(TracingConfig {
                tracing_level: log::Level::Info,
                json_tracing: DEFAULT_JSON_TRACING,
                aws_sdk_tracing: DEFAULT_AWS_SDK_TRACING,
                span_events_tracing: DEFAULT_SPAN_EVENTS_TRACING,
                disable_color_tracing: DEFAULT_DISABLE_COLOR_TRACING,
            }),
            Some(tracing_config) if tracing_config.tracing_level < log::Level::Info => {
                Some(TracingConfig {
                    tracing_level: log::Level::Info,
                    ..tracing_config
                })
            }
            tracing_config => tracing_config,
        }
    }

    fn build_command(&self) -> Result<Command, String> {
        let command = match self.command.clone() {
            Commands::ListBucket { name } => Command::ListBucket {
                name: name.filter(|name| !name.is_empty()),
            },
            Commands::ListObject {
                bucket,
                prefix,
                ext,
                minsize,
                maxsize,
            } => Command::ListObject {
                bucket,
                prefix,
                filter: SizeFilter {
                    min_bytes: minsize.unwrap_or_default(),
                    max_bytes: maxsize.unwrap_or_default(),
                    extension: ext.unwrap_or_default(),
                },
                window: PageWindow::new(self.page, self.pagesize)
                    .map_err(|e| e.to_string())?,
            },
            Commands::GetObject {
                bucket,
                key,
                output,
            } => {
                let output = output.unwrap_or_else(|| PathBuf::from(&key));
                Command::GetObject {
                    bucket,
                    key,
                    output,
                }
            }
            Commands::PutObject { bucket, key, file } => Command::PutObject { bucket, key, file },
            Commands::DeleteObject {
                bucket,
                key,
                file,
                confirm,
            } => {
                // clap guarantees that exactly one of them is given.
                let keys = match (file, key) {
                    (Some(file), _) => KeySource::File(file),
                    (None, key) => KeySource::List(key.unwrap_or_default()),
                };
                Command::DeleteObject {
                    bucket,
                    keys,
                    confirm,
                }
            }
        };

        Ok(command)
    }
}

impl TryFrom<CLIArgs> for Config {
    type Error = String;

    fn try_from(value: CLIArgs) -> Result<Self, Self::Error> {
        value.validate_config()?;

        let config_file =
            profile::find_config_file(value.config.as_deref()).map_err(|e| e.to_string())?;
        let client_config = profile::load_profile(&config_file, &value.env)
            .map_err(|e| e.to_string())?
            .to_client_config();

        Ok(Config {
            client_config,
            tracing_config: value.build_tracing_config(),
            command: value.build_command()?,
        })
    }
}
