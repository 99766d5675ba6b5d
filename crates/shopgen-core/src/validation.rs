use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::constraints::Constraint;
use crate::entities::{Dataset, Order};
use crate::error::{Error, Result};
use crate::schema::DatabaseSchema;
use crate::types::{MAX_ITEMS_PER_ORDER, round_currency};

/// Tolerance for comparing amounts that were each rounded to cents.
const AMOUNT_EPSILON: f64 = 0.005;

/// Validate internal consistency of the table catalog.
///
/// This checks:
/// - duplicate tables/columns
/// - primary key and unique columns exist
/// - foreign key columns and referenced targets exist
pub fn validate_schema(schema: &DatabaseSchema) -> Result<()> {
    let mut catalog: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for table in &schema.tables {
        if catalog.contains_key(&table.name) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.clone()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }

        catalog.insert(table.name.clone(), columns);
    }

    for table in &schema.tables {
        let columns = catalog.get(&table.name).ok_or_else(|| {
            Error::InvalidSchema(format!("missing table in catalog: {}", table.name))
        })?;
        let require = |column: &String, what: &str| -> Result<()> {
            if columns.contains(column) {
                Ok(())
            } else {
                Err(Error::InvalidSchema(format!(
                    "{what} column not found: {}.{}",
                    table.name, column
                )))
            }
        };

        for constraint in &table.constraints {
            match constraint {
                Constraint::PrimaryKey(pk) => {
                    for column in &pk.columns {
                        require(column, "primary key")?;
                    }
                }
                Constraint::Unique(unique) => {
                    for column in &unique.columns {
                        require(column, "unique")?;
                    }
                }
                Constraint::ForeignKey(fk) => {
                    for column in &fk.columns {
                        require(column, "foreign key")?;
                    }

                    let ref_columns = catalog.get(&fk.referenced_table).ok_or_else(|| {
                        Error::InvalidSchema(format!(
                            "referenced table not found: {}",
                            fk.referenced_table
                        ))
                    })?;

                    for column in &fk.referenced_columns {
                        if !ref_columns.contains(column) {
                            return Err(Error::InvalidSchema(format!(
                                "referenced column not found: {}.{}",
                                fk.referenced_table, column
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Validate the referential and arithmetic invariants of a dataset.
///
/// Returns the first violation found. This checks:
/// - identifiers run 1..=n in row order for every entity
/// - customer emails are unique
/// - every foreign key resolves
/// - each order has 1..=5 items with no repeated product
/// - line totals, order totals, and payment amounts agree to the cent
/// - exactly one payment per order, dated no earlier than the order
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    check_sequential("customers", dataset.customers.iter().map(|c| c.customer_id))?;
    check_sequential("products", dataset.products.iter().map(|p| p.product_id))?;
    check_sequential("orders", dataset.orders.iter().map(|o| o.order_id))?;
    check_sequential(
        "order_items",
        dataset.order_items.iter().map(|i| i.order_item_id),
    )?;
    check_sequential("payments", dataset.payments.iter().map(|p| p.payment_id))?;

    let mut emails = HashSet::new();
    for customer in &dataset.customers {
        if !emails.insert(customer.email.as_str()) {
            return Err(Error::InvalidDataset(format!(
                "duplicate email '{}' on customer {}",
                customer.email, customer.customer_id
            )));
        }
    }

    let customer_count = dataset.customers.len() as i64;
    let product_count = dataset.products.len() as i64;
    let orders: HashMap<i64, &Order> = dataset
        .orders
        .iter()
        .map(|order| (order.order_id, order))
        .collect();

    for order in &dataset.orders {
        if order.customer_id < 1 || order.customer_id > customer_count {
            return Err(Error::InvalidDataset(format!(
                "order {} references missing customer {}",
                order.order_id, order.customer_id
            )));
        }
    }

    let mut sums: HashMap<i64, f64> = HashMap::new();
    let mut counts: HashMap<i64, usize> = HashMap::new();
    let mut pairs = HashSet::new();
    for item in &dataset.order_items {
        if !orders.contains_key(&item.order_id) {
            return Err(Error::InvalidDataset(format!(
                "order item {} references missing order {}",
                item.order_item_id, item.order_id
            )));
        }
        if item.product_id < 1 || item.product_id > product_count {
            return Err(Error::InvalidDataset(format!(
                "order item {} references missing product {}",
                item.order_item_id, item.product_id
            )));
        }
        if !pairs.insert((item.order_id, item.product_id)) {
            return Err(Error::InvalidDataset(format!(
                "order {} lists product {} more than once",
                item.order_id, item.product_id
            )));
        }
        let expected = round_currency(item.unit_price * item.quantity as f64);
        if (item.line_total - expected).abs() > AMOUNT_EPSILON {
            return Err(Error::InvalidDataset(format!(
                "order item {} line_total {} != unit_price x quantity {}",
                item.order_item_id, item.line_total, expected
            )));
        }
        *sums.entry(item.order_id).or_insert(0.0) += item.line_total;
        *counts.entry(item.order_id).or_insert(0) += 1;
    }

    for order in &dataset.orders {
        let count = counts.get(&order.order_id).copied().unwrap_or(0);
        if !(1..=MAX_ITEMS_PER_ORDER).contains(&count) {
            return Err(Error::InvalidDataset(format!(
                "order {} has {} items, expected 1..={}",
                order.order_id, count, MAX_ITEMS_PER_ORDER
            )));
        }
        let expected = round_currency(sums.get(&order.order_id).copied().unwrap_or(0.0));
        if (order.total_amount - expected).abs() > AMOUNT_EPSILON {
            return Err(Error::InvalidDataset(format!(
                "order {} total_amount {} != sum of line totals {}",
                order.order_id, order.total_amount, expected
            )));
        }
    }

    if dataset.payments.len() != dataset.orders.len() {
        return Err(Error::InvalidDataset(format!(
            "{} payments for {} orders",
            dataset.payments.len(),
            dataset.orders.len()
        )));
    }

    let mut paid = HashSet::new();
    for payment in &dataset.payments {
        let order = orders.get(&payment.order_id).ok_or_else(|| {
            Error::InvalidDataset(format!(
                "payment {} references missing order {}",
                payment.payment_id, payment.order_id
            ))
        })?;
        if !paid.insert(payment.order_id) {
            return Err(Error::InvalidDataset(format!(
                "order {} has more than one payment",
                payment.order_id
            )));
        }
        if (payment.amount - order.total_amount).abs() > AMOUNT_EPSILON {
            return Err(Error::InvalidDataset(format!(
                "payment {} amount {} != order {} total {}",
                payment.payment_id, payment.amount, order.order_id, order.total_amount
            )));
        }
        if payment.payment_date < order.order_date {
            return Err(Error::InvalidDataset(format!(
                "payment {} dated {} before order {} on {}",
                payment.payment_id, payment.payment_date, order.order_id, order.order_date
            )));
        }
    }

    Ok(())
}

fn check_sequential(entity: &str, ids: impl Iterator<Item = i64>) -> Result<()> {
    for (index, id) in ids.enumerate() {
        let expected = index as i64 + 1;
        if id != expected {
            return Err(Error::InvalidDataset(format!(
                "{entity} id {id} at row {index}, expected {expected}"
            )));
        }
    }
    Ok(())
}
