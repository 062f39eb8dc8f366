use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: PathBuf, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MovieError>;
