use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use shopgen_core::{
    Customer, DatabaseSchema, EntityKind, Order, OrderItem, Payment, Product, Table,
    ecommerce_schema, load_order, validate_schema,
};

use crate::adapter::Adapter;
use crate::errors::{StoreError, StoreResult};
use crate::options::StoreOptions;
use crate::report::ReportRow;

mod ddl;
mod load;
mod queries;

pub use ddl::create_table_sql;
pub use load::{LoadRecord, read_row_set};
pub use queries::REPORT_SQL;

/// Rows written into one table by a load.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableLoad {
    pub table: String,
    pub rows: u64,
}

/// Outcome of loading every row-set, in load order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadSummary {
    pub tables: Vec<TableLoad>,
}

impl LoadSummary {
    pub fn rows(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|entry| entry.table == table)
            .map(|entry| entry.rows)
    }
}

/// Locate every row-set under `dir`, failing on the first one that is absent.
pub fn resolve_row_set_paths(dir: &Path) -> StoreResult<BTreeMap<EntityKind, PathBuf>> {
    let mut paths = BTreeMap::new();
    for kind in EntityKind::ALL {
        let path = dir.join(kind.csv_file_name());
        if !path.is_file() {
            return Err(StoreError::MissingInput { path });
        }
        paths.insert(kind, path);
    }
    Ok(paths)
}

/// Adapter for a single-file SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteAdapter {
    pool: SqlitePool,
    schema: DatabaseSchema,
    options: StoreOptions,
}

impl SqliteAdapter {
    /// Open `path`, creating the file when it does not exist yet.
    pub async fn create(path: &Path, options: StoreOptions) -> StoreResult<Self> {
        Self::connect(path, true, options).await
    }

    /// Open an existing database file.
    pub async fn open_existing(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Self::connect(path, false, StoreOptions::default()).await
    }

    async fn connect(path: &Path, create: bool, options: StoreOptions) -> StoreResult<Self> {
        let schema = ecommerce_schema();
        validate_schema(&schema)?;

        let connect_options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(create)
            .foreign_keys(true);
        // Single writer: one connection serializes every statement.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_options)
            .await?;

        info!(path = %path.display(), "database opened");
        Ok(Self {
            pool,
            schema,
            options,
        })
    }

    fn table(&self, kind: EntityKind) -> StoreResult<&Table> {
        self.schema.table(kind.table_name()).ok_or_else(|| {
            StoreError::Core(shopgen_core::Error::InvalidSchema(format!(
                "table '{kind}' missing from catalog"
            )))
        })
    }

    /// Replace the contents of a single table with the row-set at `path`.
    ///
    /// Foreign keys stay enforced, so replacing a parent table fails while
    /// child rows still reference it.
    pub async fn load_table<R: LoadRecord>(&self, path: &Path) -> StoreResult<u64> {
        if !path.is_file() {
            return Err(StoreError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        let table = self.table(R::KIND)?;
        let rows = read_row_set::<R>(path)?;

        let mut tx = self.pool.begin().await?;
        load::clear_table(&mut tx, table).await?;
        let written = load::insert_rows(&mut tx, table, &rows, self.options.batch_size).await?;
        tx.commit().await?;

        info!(table = %table.name, rows = written, "table loaded");
        Ok(written)
    }

    /// Number of rows currently stored in `table`.
    pub async fn count_rows(&self, table: &str) -> StoreResult<i64> {
        queries::count_rows(&self.pool, table).await
    }

    /// Stored `CREATE TABLE` statement for `table`.
    pub async fn table_definition(&self, table: &str) -> StoreResult<Option<String>> {
        queries::table_definition(&self.pool, table).await
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl Adapter for SqliteAdapter {
    async fn create_tables(&self) -> StoreResult<()> {
        for kind in load_order(&self.schema)? {
            let table = self.table(kind)?;
            sqlx::query(&create_table_sql(table))
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    async fn load_row_sets(&self, csv_dir: &Path) -> StoreResult<LoadSummary> {
        let paths = resolve_row_set_paths(csv_dir)?;
        let order = load_order(&self.schema)?;

        let customers = read_row_set::<Customer>(&paths[&EntityKind::Customers])?;
        let products = read_row_set::<Product>(&paths[&EntityKind::Products])?;
        let orders = read_row_set::<Order>(&paths[&EntityKind::Orders])?;
        let order_items = read_row_set::<OrderItem>(&paths[&EntityKind::OrderItems])?;
        let payments = read_row_set::<Payment>(&paths[&EntityKind::Payments])?;

        let batch_size = self.options.batch_size;
        let mut tx = self.pool.begin().await?;

        // Children first, so no delete trips a foreign key.
        for kind in order.iter().rev() {
            load::clear_table(&mut tx, self.table(*kind)?).await?;
        }

        let mut summary = LoadSummary::default();
        for kind in order {
            let table = self.table(kind)?;
            let rows = match kind {
                EntityKind::Customers => {
                    load::insert_rows(&mut tx, table, &customers, batch_size).await?
                }
                EntityKind::Products => {
                    load::insert_rows(&mut tx, table, &products, batch_size).await?
                }
                EntityKind::Orders => load::insert_rows(&mut tx, table, &orders, batch_size).await?,
                EntityKind::OrderItems => {
                    load::insert_rows(&mut tx, table, &order_items, batch_size).await?
                }
                EntityKind::Payments => {
                    load::insert_rows(&mut tx, table, &payments, batch_size).await?
                }
            };
            info!(table = %table.name, rows, "table loaded");
            summary.tables.push(TableLoad {
                table: table.name.clone(),
                rows,
            });
        }

        tx.commit().await?;
        Ok(summary)
    }

    async fn report(&self) -> StoreResult<Vec<ReportRow>> {
        let rows = queries::fetch_report(&self.pool).await?;
        info!(rows = rows.len(), "report executed");
        Ok(rows)
    }
}
