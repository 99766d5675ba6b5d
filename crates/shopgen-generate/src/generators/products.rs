use rand::Rng;
use shopgen_core::{Product, ProductCategory, round_currency};

use crate::faker;
use crate::generators::DateWindow;

const PRICE_MIN: f64 = 5.0;
const PRICE_MAX: f64 = 500.0;
const STOCK_MIN: i64 = 10;
const STOCK_MAX: i64 = 500;

/// Generate `count` products with uniform categories, prices, and stock levels.
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    created: DateWindow,
) -> Vec<Product> {
    let mut products = Vec::new();

    for product_id in 1..=count as i64 {
        let price = round_currency(rng.random_range(PRICE_MIN..=PRICE_MAX));
        let product_name = faker::catch_phrase(rng);
        let category = ProductCategory::ALL[rng.random_range(0..ProductCategory::ALL.len())];
        products.push(Product {
            product_id,
            product_name,
            category,
            price,
            stock_quantity: rng.random_range(STOCK_MIN..=STOCK_MAX),
            created_at: created.sample(rng),
        });
    }

    products
}
