use ::tracing::trace;
use clap::Parser;
use rusty_fork::rusty_fork_test;

use s3cli::CLIArgs;
use s3cli::Config;

mod cli;
mod tracing;

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() {
    let config = load_config_exit_if_err();

    start_tracing_if_necessary(&config);

    trace!("config = {:?}", config);

    if cli::run(config).await.is_err() {
        std::process::exit(cli::EXIT_CODE_ERROR);
    }
}

#[cfg(not(tarpaulin_include))]
fn load_config_exit_if_err() -> Config {
    match Config::try_from(CLIArgs::parse()) {
        Ok(config) => config,
        Err(error_message) => {
            clap::Error::raw(clap::error::ErrorKind::ValueValidation, error_message).exit()
        }
    }
}

fn start_tracing_if_necessary(config: &Config) -> bool {
    let Some(tracing_config) = config.tracing_config.as_ref() else {
        return false;
    };

    tracing::init_tracing(tracing_config);
    true
}

#[cfg(test)]
fn build_config(args: &[&str]) -> Config {
    use std::io::Write;

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(br#"{"default": {"region": "us-east-1"}}"#)
        .unwrap();
    config_file.flush().unwrap();

    let config_path = config_file.path().to_string_lossy().to_string();
    let mut all_args = vec!["unittest", "--config", &config_path];
    all_args.extend_from_slice(args);

    Config::try_from(CLIArgs::try_parse_from(all_args).unwrap()).unwrap()
}

rusty_fork_test! {
    #[test]
    fn with_tracing() {
        let config = build_config(&["list-bucket"]);
        assert!(start_tracing_if_necessary(&config));
    }

    #[test]
    fn without_tracing() {
        let config = build_config(&["-qq", "list-bucket"]);
        assert!(!start_tracing_if_necessary(&config));
    }

    #[test]
    fn delete_object_always_traces() {
        let config = build_config(&["-qq", "delete-object", "bucket", "--key", "key"]);
        assert!(start_tracing_if_necessary(&config));
    }
}
