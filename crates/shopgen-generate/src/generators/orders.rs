use rand::Rng;
use shopgen_core::{Order, OrderStatus};

use crate::errors::GenerationError;
use crate::faker;
use crate::foreign::ParentKeys;
use crate::generators::{DateWindow, WeightedChoice};

/// Generate `count` orders owned by customers drawn uniformly from `customers`.
///
/// Totals start at `0.0`; [`super::generate_order_items`] patches them.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    customers: &ParentKeys,
    ordered: DateWindow,
) -> Result<Vec<Order>, GenerationError> {
    if count > 0 && customers.is_empty() {
        return Err(GenerationError::Precondition(
            "orders requested but no customers were generated".to_string(),
        ));
    }

    let statuses = WeightedChoice::new(&OrderStatus::WEIGHTED)?;
    let mut orders = Vec::new();

    for order_id in 1..=count as i64 {
        let order_date = ordered.sample(rng);
        let shipping_address = faker::street_address(rng);
        orders.push(Order {
            order_id,
            customer_id: customers.pick(rng)?,
            order_date,
            shipping_address,
            status: statuses.sample(rng),
            total_amount: 0.0,
        });
    }

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn window() -> DateWindow {
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        DateWindow::months_before(end, 18).expect("window")
    }

    #[test]
    fn owners_come_from_customer_keys() {
        let customers = ParentKeys::new("customers", vec![3, 5, 8]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let orders = generate_orders(&mut rng, 50, &customers, window()).expect("orders");

        assert_eq!(orders.len(), 50);
        assert!(orders.iter().all(|o| [3, 5, 8].contains(&o.customer_id)));
        assert!(orders.iter().all(|o| o.total_amount == 0.0));
    }

    #[test]
    fn orders_without_customers_is_a_precondition_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let err = generate_orders(&mut rng, 1, &ParentKeys::default(), window())
            .expect_err("no customers");
        assert!(matches!(err, GenerationError::Precondition(_)));
    }
}
