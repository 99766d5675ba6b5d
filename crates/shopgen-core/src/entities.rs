//! Plain records for the five e-commerce entities.
//!
//! Field order is the CSV column order and matches the table catalog in
//! [`crate::schema`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{OrderStatus, PaymentMethod, PaymentStatus, ProductCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub signup_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub stock_quantity: i64,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub shipping_address: String,
    pub status: OrderStatus,
    /// Sum of the order's line totals, patched in once items exist.
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub order_id: i64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
}

/// All row-sets of one generation run, each in identifier order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

impl Dataset {
    /// Items belonging to `order_id`, in id order.
    pub fn items_for_order(&self, order_id: i64) -> impl Iterator<Item = &OrderItem> {
        self.order_items
            .iter()
            .filter(move |item| item.order_id == order_id)
    }
}
