use std::collections::BTreeMap;

use rand::Rng;
use shopgen_core::{MAX_ITEMS_PER_ORDER, Order, OrderItem, round_currency};

use crate::errors::GenerationError;
use crate::foreign::ProductCatalog;

const QUANTITY_MIN: i64 = 1;
const QUANTITY_MAX: i64 = 4;
/// Unit prices deviate from the catalog price by at most this fraction.
const PRICE_JITTER: f64 = 0.10;

/// Generate 1..=5 distinct lines per order and patch each order's total.
///
/// Item ids run across all orders in order-id order.
pub fn generate_order_items<R: Rng + ?Sized>(
    rng: &mut R,
    orders: &mut [Order],
    catalog: &ProductCatalog<'_>,
) -> Result<Vec<OrderItem>, GenerationError> {
    let mut totals: BTreeMap<i64, f64> = BTreeMap::new();
    let mut items = Vec::new();

    for order in orders.iter() {
        let item_count = rng.random_range(1..=MAX_ITEMS_PER_ORDER);
        let total = totals.entry(order.order_id).or_insert(0.0);

        for product in catalog.sample_distinct(rng, item_count)? {
            let factor = rng.random_range((1.0 - PRICE_JITTER)..=(1.0 + PRICE_JITTER));
            let unit_price = round_currency(product.price * factor);
            let quantity = rng.random_range(QUANTITY_MIN..=QUANTITY_MAX);
            let line_total = round_currency(unit_price * quantity as f64);
            *total += line_total;

            items.push(OrderItem {
                order_item_id: items.len() as i64 + 1,
                order_id: order.order_id,
                product_id: product.product_id,
                quantity,
                unit_price,
                line_total,
            });
        }
    }

    for order in orders.iter_mut() {
        let total = totals.get(&order.order_id).copied().unwrap_or(0.0);
        order.total_amount = round_currency(total);
    }

    Ok(items)
}
