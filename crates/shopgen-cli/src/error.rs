use std::path::PathBuf;

use shopgen_generate::GenerationError;
use shopgen_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("config error in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
