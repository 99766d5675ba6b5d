use serde::{Deserialize, Serialize};

/// File name of the database when none is given.
pub const DEFAULT_DATABASE_FILE: &str = "ecommerce.db";

/// Options that control how row-sets are loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Database file name, resolved against the load directory.
    pub database_file: String,
    /// Rows per multi-row `INSERT` statement.
    pub batch_size: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            batch_size: 500,
        }
    }
}
