use sqlx::SqlitePool;

use crate::errors::StoreResult;
use crate::report::ReportRow;

/// One row per order line, newest order first, lines in id order.
pub const REPORT_SQL: &str = r#"
SELECT
    c.first_name || ' ' || c.last_name AS customer_name,
    c.email,
    o.order_id,
    o.order_date,
    p.product_name,
    oi.quantity,
    oi.unit_price AS price,
    pay.amount AS total_amount_paid
FROM customers AS c
JOIN orders AS o ON o.customer_id = c.customer_id
JOIN order_items AS oi ON oi.order_id = o.order_id
JOIN products AS p ON p.product_id = oi.product_id
JOIN payments AS pay ON pay.order_id = o.order_id
ORDER BY o.order_date DESC, o.order_id DESC, oi.order_item_id ASC
"#;

pub async fn fetch_report(pool: &SqlitePool) -> StoreResult<Vec<ReportRow>> {
    let rows = sqlx::query_as::<_, ReportRow>(REPORT_SQL)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> StoreResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Stored `CREATE TABLE` text for `table`, if it exists.
pub async fn table_definition(pool: &SqlitePool, table: &str) -> StoreResult<Option<String>> {
    let sql = sqlx::query_scalar::<_, String>(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(table)
    .fetch_optional(pool)
    .await?;
    Ok(sql)
}
