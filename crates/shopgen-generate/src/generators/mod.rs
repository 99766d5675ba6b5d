//! Per-entity generators.
//!
//! Each generator draws from a caller-supplied RNG and assigns identifiers
//! starting at 1, so a fixed seed fixes the whole row-set.

mod customers;
mod order_items;
mod orders;
mod payments;
mod products;
mod weighted;

pub use customers::generate_customers;
pub use order_items::generate_order_items;
pub use orders::generate_orders;
pub use payments::generate_payments;
pub use products::generate_products;
pub use weighted::WeightedChoice;

use chrono::{Months, NaiveDate, TimeDelta};
use rand::Rng;

use crate::errors::GenerationError;

/// Inclusive range of calendar dates to draw from uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window covering the `months` months that end on `end`.
    pub fn months_before(end: NaiveDate, months: u32) -> Result<Self, GenerationError> {
        let start = end.checked_sub_months(Months::new(months)).ok_or_else(|| {
            GenerationError::InvalidConfig(format!(
                "reference date {end} is too early for a {months}-month window"
            ))
        })?;
        Ok(Self { start, end })
    }

    /// Window from `start` to `end`; collapses to `start` when `end` precedes it.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let span = (self.end - self.start).num_days();
        self.start + TimeDelta::days(rng.random_range(0..=span))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn months_before_counts_calendar_months() {
        let window = DateWindow::months_before(date(2025, 1, 1), 18).expect("window");
        assert_eq!(window.start, date(2023, 7, 1));
        assert_eq!(window.end, date(2025, 1, 1));
    }

    #[test]
    fn samples_stay_inside_window() {
        let window = DateWindow::between(date(2024, 2, 27), date(2024, 3, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let day = window.sample(&mut rng);
            assert!(day >= window.start && day <= window.end);
        }
    }

    #[test]
    fn inverted_window_collapses_to_start() {
        let window = DateWindow::between(date(2024, 5, 10), date(2024, 5, 1));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(window.sample(&mut rng), date(2024, 5, 10));
    }
}
