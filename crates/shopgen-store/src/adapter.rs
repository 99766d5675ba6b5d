use std::path::Path;

use async_trait::async_trait;

use crate::errors::StoreResult;
use crate::report::ReportRow;
use crate::sqlite::LoadSummary;

/// Trait implemented by database adapters that can hold the e-commerce schema.
#[async_trait]
pub trait Adapter {
    /// Create every catalog table that does not exist yet.
    async fn create_tables(&self) -> StoreResult<()>;

    /// Replace every table's contents with the CSV row-sets found in `csv_dir`.
    async fn load_row_sets(&self, csv_dir: &Path) -> StoreResult<LoadSummary>;

    /// Run the order-line report.
    async fn report(&self) -> StoreResult<Vec<ReportRow>>;
}
