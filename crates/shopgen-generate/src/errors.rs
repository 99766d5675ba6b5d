use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("dataset check failed: {0}")]
    Core(#[from] shopgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
