use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints::Constraint;
use crate::types::ColumnType;

/// The five row-sets produced by a generation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customers,
    Products,
    Orders,
    OrderItems,
    Payments,
}

impl EntityKind {
    /// Entities in CSV write order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Customers,
        EntityKind::Products,
        EntityKind::Orders,
        EntityKind::OrderItems,
        EntityKind::Payments,
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Customers => "customers",
            EntityKind::Products => "products",
            EntityKind::Orders => "orders",
            EntityKind::OrderItems => "order_items",
            EntityKind::Payments => "payments",
        }
    }

    pub fn csv_file_name(self) -> &'static str {
        match self {
            EntityKind::Customers => "customers.csv",
            EntityKind::Products => "products.csv",
            EntityKind::Orders => "orders.csv",
            EntityKind::OrderItems => "order_items.csv",
            EntityKind::Payments => "payments.csv",
        }
    }

    pub fn from_table_name(name: &str) -> Option<Self> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.table_name() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// The relational catalog the row-sets load into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSchema {
    pub tables: Vec<Table>,
}

impl DatabaseSchema {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
}

impl Table {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn foreign_keys(&self) -> impl Iterator<Item = &crate::constraints::ForeignKey> {
        self.constraints.iter().filter_map(|constraint| match constraint {
            Constraint::ForeignKey(fk) => Some(fk),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub is_nullable: bool,
}

fn column(name: &str, column_type: ColumnType, is_nullable: bool) -> Column {
    Column {
        name: name.to_string(),
        column_type,
        is_nullable,
    }
}

/// Fixed catalog for customers, products, orders, order items, and payments.
pub fn ecommerce_schema() -> DatabaseSchema {
    use ColumnType::{Date, Integer, Real, Text};

    DatabaseSchema {
        tables: vec![
            Table {
                name: "customers".to_string(),
                columns: vec![
                    column("customer_id", Integer, false),
                    column("first_name", Text, false),
                    column("last_name", Text, false),
                    column("email", Text, false),
                    column("phone", Text, true),
                    column("country", Text, true),
                    column("signup_date", Date, true),
                ],
                constraints: vec![
                    Constraint::primary_key(&["customer_id"]),
                    Constraint::unique(&["email"]),
                ],
            },
            Table {
                name: "products".to_string(),
                columns: vec![
                    column("product_id", Integer, false),
                    column("product_name", Text, false),
                    column("category", Text, true),
                    column("price", Real, false),
                    column("stock_quantity", Integer, false),
                    column("created_at", Date, true),
                ],
                constraints: vec![Constraint::primary_key(&["product_id"])],
            },
            Table {
                name: "orders".to_string(),
                columns: vec![
                    column("order_id", Integer, false),
                    column("customer_id", Integer, false),
                    column("order_date", Date, true),
                    column("shipping_address", Text, true),
                    column("status", Text, true),
                    column("total_amount", Real, true),
                ],
                constraints: vec![
                    Constraint::primary_key(&["order_id"]),
                    Constraint::foreign_key("customer_id", "customers", "customer_id"),
                ],
            },
            Table {
                name: "order_items".to_string(),
                columns: vec![
                    column("order_item_id", Integer, false),
                    column("order_id", Integer, false),
                    column("product_id", Integer, false),
                    column("quantity", Integer, false),
                    column("unit_price", Real, false),
                    column("line_total", Real, false),
                ],
                constraints: vec![
                    Constraint::primary_key(&["order_item_id"]),
                    Constraint::foreign_key("order_id", "orders", "order_id"),
                    Constraint::foreign_key("product_id", "products", "product_id"),
                ],
            },
            Table {
                name: "payments".to_string(),
                columns: vec![
                    column("payment_id", Integer, false),
                    column("order_id", Integer, false),
                    column("payment_date", Date, true),
                    column("payment_method", Text, true),
                    column("amount", Real, true),
                    column("currency", Text, true),
                    column("status", Text, true),
                ],
                constraints: vec![
                    Constraint::primary_key(&["payment_id"]),
                    Constraint::foreign_key("order_id", "orders", "order_id"),
                ],
            },
        ],
    }
}
