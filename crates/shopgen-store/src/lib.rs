//! Relational storage for generated row-sets.
//!
//! Creates the e-commerce schema in a SQLite file, bulk-loads the CSV
//! row-sets into it, and runs the order-line report query.

pub mod adapter;
pub mod errors;
pub mod options;
pub mod report;
pub mod sqlite;

pub use adapter::Adapter;
pub use errors::StoreError;
pub use options::{DEFAULT_DATABASE_FILE, StoreOptions};
pub use report::{PREVIEW_ROWS, ReportRow, render_preview};
pub use sqlite::{LoadSummary, SqliteAdapter, TableLoad, resolve_row_set_paths};
