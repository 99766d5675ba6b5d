//! Deterministic synthetic e-commerce data generation.
//!
//! The engine draws customers, products, orders, order items, and payments
//! from seeded ChaCha8 streams, checks referential consistency, and writes
//! each row-set as CSV.

pub mod engine;
pub mod errors;
pub mod faker;
pub mod foreign;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult, REPORT_FILE_NAME};
pub use errors::GenerationError;
pub use model::{
    DEFAULT_REFERENCE_DATE, EntityCounts, GenerateOptions, GenerationReport, TableReport,
};
