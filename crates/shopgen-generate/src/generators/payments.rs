use chrono::NaiveDate;
use rand::Rng;
use shopgen_core::{CURRENCY, Order, Payment, PaymentMethod, PaymentStatus};

use crate::errors::GenerationError;
use crate::generators::{DateWindow, WeightedChoice};

/// Generate exactly one payment per finalized order.
///
/// Payments are dated between the order date and `reference_date` and carry
/// the order's total as their amount.
pub fn generate_payments<R: Rng + ?Sized>(
    rng: &mut R,
    orders: &[Order],
    reference_date: NaiveDate,
) -> Result<Vec<Payment>, GenerationError> {
    let methods = WeightedChoice::new(&PaymentMethod::WEIGHTED)?;
    let statuses = WeightedChoice::new(&PaymentStatus::WEIGHTED)?;

    Ok(orders
        .iter()
        .enumerate()
        .map(|(idx, order)| Payment {
            payment_id: idx as i64 + 1,
            order_id: order.order_id,
            payment_date: DateWindow::between(order.order_date, reference_date).sample(rng),
            payment_method: methods.sample(rng),
            amount: order.total_amount,
            currency: CURRENCY.to_string(),
            status: statuses.sample(rng),
        })
        .collect())
}
