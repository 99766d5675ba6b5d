use thiserror::Error;

/// Core error type shared across shopgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A generated or loaded dataset breaks a referential or arithmetic invariant.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// The table catalog violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// Foreign keys form a cycle, so no load order exists.
    #[error("cyclic foreign keys between: {0}")]
    CyclicSchema(String),
}

/// Convenience alias for results returned by shopgen crates.
pub type Result<T> = std::result::Result<T, Error>;
