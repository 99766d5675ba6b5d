use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default seed, matching the one the sample datasets were produced with.
pub const DEFAULT_SEED: u64 = 42;

/// Number of root entities to generate. Order items and payments follow from orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub customers: u64,
    pub products: u64,
    pub orders: u64,
}

impl Default for EntityCounts {
    fn default() -> Self {
        Self {
            customers: 120,
            products: 80,
            orders: 160,
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the CSV row-sets are written.
    pub out_dir: PathBuf,
    /// Seed for every pseudo-random stream of the run.
    pub seed: u64,
    /// The "today" that all date windows end on.
    pub reference_date: NaiveDate,
    pub counts: EntityCounts,
    /// Maximum draws for a unique customer email before falling back to an id-tagged one.
    pub max_attempts_row: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            seed: DEFAULT_SEED,
            reference_date: DEFAULT_REFERENCE_DATE,
            counts: EntityCounts::default(),
            max_attempts_row: 50,
        }
    }
}

/// Day the date windows end on unless configured otherwise.
pub const DEFAULT_REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default reference date"),
};

/// Summary of a generated row-set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub file: String,
    /// Requested count for root entities; `None` for row-sets derived from orders.
    pub rows_requested: Option<u64>,
    pub rows_generated: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub reference_date: NaiveDate,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            seed,
            reference_date,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.bytes_written += table.bytes_written;
        self.tables.push(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reference_date_is_new_year_2025() {
        let options = GenerateOptions::default();
        assert_eq!(
            options.reference_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
        );
        assert_eq!(options.reference_date, DEFAULT_REFERENCE_DATE);
    }
}
