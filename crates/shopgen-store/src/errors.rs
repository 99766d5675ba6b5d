use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading or querying the database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row-set or database file that must exist beforehand is absent.
    #[error("missing input file: {}", .path.display())]
    MissingInput { path: PathBuf },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("csv error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("catalog error: {0}")]
    Core(#[from] shopgen_core::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
