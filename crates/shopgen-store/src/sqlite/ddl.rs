use shopgen_core::{Constraint, Table};

/// Render an idempotent `CREATE TABLE` statement for a catalog table.
pub fn create_table_sql(table: &Table) -> String {
    let mut lines: Vec<String> = table
        .columns
        .iter()
        .map(|column| {
            let null = if column.is_nullable { "" } else { " NOT NULL" };
            format!("{} {}{}", column.name, column.column_type.as_sql(), null)
        })
        .collect();

    for constraint in &table.constraints {
        lines.push(match constraint {
            Constraint::PrimaryKey(pk) => format!("PRIMARY KEY ({})", pk.columns.join(", ")),
            Constraint::Unique(unique) => format!("UNIQUE ({})", unique.columns.join(", ")),
            Constraint::ForeignKey(fk) => format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                fk.columns.join(", "),
                fk.referenced_table,
                fk.referenced_columns.join(", ")
            ),
        });
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table.name,
        lines.join(",\n    ")
    )
}

/// Prefix of a multi-row insert covering every catalog column, in order.
pub fn insert_prefix(table: &Table) -> String {
    format!(
        "INSERT INTO {} ({}) ",
        table.name,
        table.column_names().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use shopgen_core::ecommerce_schema;

    use super::*;

    #[test]
    fn renders_keys_and_references() {
        let schema = ecommerce_schema();
        let sql = create_table_sql(schema.table("order_items").expect("order_items"));

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS order_items ("));
        assert!(sql.contains("order_item_id INTEGER NOT NULL"));
        assert!(sql.contains("PRIMARY KEY (order_item_id)"));
        assert!(sql.contains("FOREIGN KEY (order_id) REFERENCES orders (order_id)"));
        assert!(sql.contains("FOREIGN KEY (product_id) REFERENCES products (product_id)"));
    }

    #[test]
    fn nullable_columns_have_no_constraint() {
        let schema = ecommerce_schema();
        let sql = create_table_sql(schema.table("customers").expect("customers"));

        assert!(sql.contains("    phone TEXT,\n"));
        assert!(sql.contains("UNIQUE (email)"));
    }

    #[test]
    fn insert_prefix_lists_columns_in_order() {
        let schema = ecommerce_schema();
        let prefix = insert_prefix(schema.table("payments").expect("payments"));
        assert_eq!(
            prefix,
            "INSERT INTO payments (payment_id, order_id, payment_date, payment_method, amount, \
             currency, status) "
        );
    }
}
