use std::path::Path;

use serde::de::DeserializeOwned;
use shopgen_core::{Customer, EntityKind, Order, OrderItem, Payment, Product, Table};
use sqlx::query_builder::Separated;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::errors::{StoreError, StoreResult};
use crate::sqlite::ddl::insert_prefix;

/// A row-set record that can be bound into a multi-row `INSERT`.
pub trait LoadRecord: DeserializeOwned + Send + Sync {
    const KIND: EntityKind;

    /// Bind every column in catalog order.
    fn push_binds<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>);
}

impl LoadRecord for Customer {
    const KIND: EntityKind = EntityKind::Customers;

    fn push_binds<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>) {
        row.push_bind(self.customer_id)
            .push_bind(self.first_name.clone())
            .push_bind(self.last_name.clone())
            .push_bind(self.email.clone())
            .push_bind(self.phone.clone())
            .push_bind(self.country.clone())
            .push_bind(self.signup_date);
    }
}

impl LoadRecord for Product {
    const KIND: EntityKind = EntityKind::Products;

    fn push_binds<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>) {
        row.push_bind(self.product_id)
            .push_bind(self.product_name.clone())
            .push_bind(self.category.as_str())
            .push_bind(self.price)
            .push_bind(self.stock_quantity)
            .push_bind(self.created_at);
    }
}

impl LoadRecord for Order {
    const KIND: EntityKind = EntityKind::Orders;

    fn push_binds<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>) {
        row.push_bind(self.order_id)
            .push_bind(self.customer_id)
            .push_bind(self.order_date)
            .push_bind(self.shipping_address.clone())
            .push_bind(self.status.as_str())
            .push_bind(self.total_amount);
    }
}

impl LoadRecord for OrderItem {
    const KIND: EntityKind = EntityKind::OrderItems;

    fn push_binds<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>) {
        row.push_bind(self.order_item_id)
            .push_bind(self.order_id)
            .push_bind(self.product_id)
            .push_bind(self.quantity)
            .push_bind(self.unit_price)
            .push_bind(self.line_total);
    }
}

impl LoadRecord for Payment {
    const KIND: EntityKind = EntityKind::Payments;

    fn push_binds<'args>(&self, row: &mut Separated<'_, 'args, Sqlite, &'static str>) {
        row.push_bind(self.payment_id)
            .push_bind(self.order_id)
            .push_bind(self.payment_date)
            .push_bind(self.payment_method.as_str())
            .push_bind(self.amount)
            .push_bind(self.currency.clone())
            .push_bind(self.status.as_str());
    }
}

/// Read a whole CSV row-set into typed records.
pub fn read_row_set<R: LoadRecord>(path: &Path) -> StoreResult<Vec<R>> {
    let csv_error = |source: csv::Error| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    reader
        .deserialize()
        .collect::<Result<Vec<R>, csv::Error>>()
        .map_err(csv_error)
}

/// Delete every row of `table`.
pub async fn clear_table(conn: &mut SqliteConnection, table: &Table) -> StoreResult<u64> {
    let deleted = sqlx::query(&format!("DELETE FROM {}", table.name))
        .execute(&mut *conn)
        .await?
        .rows_affected();
    Ok(deleted)
}

/// SQLite's default limit on bound parameters per statement.
const MAX_BIND_VARIABLES: usize = 32_766;

/// Rows per `INSERT` for `table`: `batch_size`, lowered to fit the bind limit.
pub fn rows_per_statement(table: &Table, batch_size: usize) -> usize {
    let fits = MAX_BIND_VARIABLES / table.columns.len().max(1);
    batch_size.clamp(1, fits.max(1))
}

/// Insert `rows` in batches of up to `batch_size`, returning the rows written.
pub async fn insert_rows<R: LoadRecord>(
    conn: &mut SqliteConnection,
    table: &Table,
    rows: &[R],
    batch_size: usize,
) -> StoreResult<u64> {
    let prefix = insert_prefix(table);
    let mut written = 0;

    for chunk in rows.chunks(rows_per_statement(table, batch_size)) {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(&prefix);
        builder.push_values(chunk, |mut row, record| record.push_binds(&mut row));
        written += builder.build().execute(&mut *conn).await?.rows_affected();
    }

    Ok(written)
}
