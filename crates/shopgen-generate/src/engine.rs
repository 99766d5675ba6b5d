use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, warn};

use shopgen_core::{Dataset, EntityKind, Table, ecommerce_schema, validate_dataset};

use crate::errors::GenerationError;
use crate::foreign::{ParentKeys, ProductCatalog};
use crate::generators::{
    DateWindow, generate_customers, generate_order_items, generate_orders, generate_payments,
    generate_products,
};
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table_csv;

const SIGNUP_WINDOW_MONTHS: u32 = 24;
const CATALOG_WINDOW_MONTHS: u32 = 36;
const ORDER_WINDOW_MONTHS: u32 = 18;

/// File name of the JSON run summary written next to the row-sets.
pub const REPORT_FILE_NAME: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating the e-commerce row-sets.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate and validate the dataset in memory without touching disk.
    pub fn generate(&self) -> Result<Dataset, GenerationError> {
        let options = &self.options;
        let reference_date = options.reference_date;
        let counts = options.counts;

        let mut customer_rng = entity_rng(options.seed, EntityKind::Customers);
        let customers = generate_customers(
            &mut customer_rng,
            counts.customers,
            DateWindow::months_before(reference_date, SIGNUP_WINDOW_MONTHS)?,
            options.max_attempts_row,
        );

        let mut product_rng = entity_rng(options.seed, EntityKind::Products);
        let products = generate_products(
            &mut product_rng,
            counts.products,
            DateWindow::months_before(reference_date, CATALOG_WINDOW_MONTHS)?,
        );
        let catalog = ProductCatalog::new(&products)?;

        let mut order_rng = entity_rng(options.seed, EntityKind::Orders);
        let mut orders = generate_orders(
            &mut order_rng,
            counts.orders,
            &ParentKeys::from_customers(&customers),
            DateWindow::months_before(reference_date, ORDER_WINDOW_MONTHS)?,
        )?;

        let mut item_rng = entity_rng(options.seed, EntityKind::OrderItems);
        let order_items = generate_order_items(&mut item_rng, &mut orders, &catalog)?;

        let mut payment_rng = entity_rng(options.seed, EntityKind::Payments);
        let payments = generate_payments(&mut payment_rng, &orders, reference_date)?;

        let dataset = Dataset {
            customers,
            products,
            orders,
            order_items,
            payments,
        };
        validate_dataset(&dataset)?;
        Ok(dataset)
    }

    /// Generate the dataset and write one CSV per entity plus the run report.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let out_dir = self.options.out_dir.clone();
        let counts = self.options.counts;

        info!(
            seed = self.options.seed,
            reference_date = %self.options.reference_date,
            customers = counts.customers,
            products = counts.products,
            orders = counts.orders,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let dataset = match self.generate() {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!(error = %err, "generation failed");
                return Err(err);
            }
        };

        std::fs::create_dir_all(&out_dir)?;
        let schema = ecommerce_schema();
        let mut report = GenerationReport::new(self.options.seed, self.options.reference_date);

        for kind in EntityKind::ALL {
            let table = schema.table(kind.table_name()).ok_or_else(|| {
                GenerationError::InvalidConfig(format!("table '{kind}' missing from catalog"))
            })?;
            let (rows_requested, table_report) = match kind {
                EntityKind::Customers => (
                    Some(counts.customers),
                    write_entity(&out_dir, kind, table, &dataset.customers)?,
                ),
                EntityKind::Products => (
                    Some(counts.products),
                    write_entity(&out_dir, kind, table, &dataset.products)?,
                ),
                EntityKind::Orders => (
                    Some(counts.orders),
                    write_entity(&out_dir, kind, table, &dataset.orders)?,
                ),
                EntityKind::OrderItems => (
                    None,
                    write_entity(&out_dir, kind, table, &dataset.order_items)?,
                ),
                EntityKind::Payments => (
                    None,
                    write_entity(&out_dir, kind, table, &dataset.payments)?,
                ),
            };

            info!(
                table = %kind,
                rows_generated = table_report.rows_generated,
                bytes_written = table_report.bytes_written,
                "table generated"
            );
            report.record_table(TableReport {
                rows_requested,
                ..table_report
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        let report_path = out_dir.join(REPORT_FILE_NAME);
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir,
            dataset,
            report,
        })
    }
}

fn write_entity<T: Serialize>(
    out_dir: &Path,
    kind: EntityKind,
    table: &Table,
    rows: &[T],
) -> Result<TableReport, GenerationError> {
    let path = out_dir.join(kind.csv_file_name());
    let bytes_written = write_table_csv(&path, table, rows)?;
    Ok(TableReport {
        table: kind.table_name().to_string(),
        file: kind.csv_file_name().to_string(),
        rows_requested: None,
        rows_generated: rows.len() as u64,
        bytes_written,
    })
}

/// Independent stream per entity so row-sets stay stable when other counts change.
fn entity_rng(seed: u64, kind: EntityKind) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, kind.table_name()))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_seeds_differ() {
        let customers = hash_seed(42, "customers");
        let products = hash_seed(42, "products");
        assert_ne!(customers, products);
        assert_eq!(customers, hash_seed(42, "customers"));
    }
}
