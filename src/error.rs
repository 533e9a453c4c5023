use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("could not decode {} with any supported encoding", .0.display())]
    DecodeFailure(PathBuf),

    #[error("failed to write result to {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("invalid config file {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
