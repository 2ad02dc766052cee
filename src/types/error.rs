use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum S3cliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("{operation} failed: {message}")]
    RemoteCall {
        operation: &'static str,
        message: String,
    },
    #[error("invalid size: {0}")]
    Parse(String),
    #[error("write content length invalid, {actual} != {expected}")]
    TransferIntegrity { expected: u64, actual: u64 },
}
