use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound for distinct products on a single order.
pub const MAX_ITEMS_PER_ORDER: usize = 5;

/// Currency recorded on every payment.
pub const CURRENCY: &str = "USD";

/// Storage class of a column in the relational catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Date,
}

impl ColumnType {
    pub fn as_sql(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
            ColumnType::Date => "DATE",
        }
    }
}

/// Round a monetary amount to cents.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Product catalog category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Electronics,
    #[serde(rename = "Home & Kitchen")]
    HomeAndKitchen,
    Apparel,
    Beauty,
    Sports,
    Books,
    Toys,
    Grocery,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Electronics,
        ProductCategory::HomeAndKitchen,
        ProductCategory::Apparel,
        ProductCategory::Beauty,
        ProductCategory::Sports,
        ProductCategory::Books,
        ProductCategory::Toys,
        ProductCategory::Grocery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::HomeAndKitchen => "Home & Kitchen",
            ProductCategory::Apparel => "Apparel",
            ProductCategory::Beauty => "Beauty",
            ProductCategory::Sports => "Sports",
            ProductCategory::Books => "Books",
            ProductCategory::Toys => "Toys",
            ProductCategory::Grocery => "Grocery",
        }
    }
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Relative draw weights.
    pub const WEIGHTED: [(OrderStatus, u32); 5] = [
        (OrderStatus::Pending, 10),
        (OrderStatus::Processing, 20),
        (OrderStatus::Shipped, 30),
        (OrderStatus::Delivered, 35),
        (OrderStatus::Cancelled, 5),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    BankTransfer,
    GiftCard,
}

impl PaymentMethod {
    /// Relative draw weights.
    pub const WEIGHTED: [(PaymentMethod, u32); 4] = [
        (PaymentMethod::CreditCard, 50),
        (PaymentMethod::Paypal, 25),
        (PaymentMethod::BankTransfer, 15),
        (PaymentMethod::GiftCard, 10),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::GiftCard => "gift_card",
        }
    }
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// Relative draw weights.
    pub const WEIGHTED: [(PaymentStatus, u32); 4] = [
        (PaymentStatus::Completed, 70),
        (PaymentStatus::Pending, 15),
        (PaymentStatus::Failed, 10),
        (PaymentStatus::Refunded, 5),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(ProductCategory, OrderStatus, PaymentMethod, PaymentStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_cents_away_from_zero() {
        assert_eq!(round_currency(10.005_f64 + 1e-9), 10.01);
        assert_eq!(round_currency(3.14159), 3.14);
    }

    #[test]
    fn display_matches_serialized_labels() {
        let json = serde_json::to_string(&ProductCategory::HomeAndKitchen).expect("serialize");
        assert_eq!(json, "\"Home & Kitchen\"");
        assert_eq!(ProductCategory::HomeAndKitchen.to_string(), "Home & Kitchen");

        let json = serde_json::to_string(&PaymentMethod::BankTransfer).expect("serialize");
        assert_eq!(json, "\"bank_transfer\"");
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "bank_transfer");
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let order: u32 = OrderStatus::WEIGHTED.iter().map(|(_, weight)| weight).sum();
        let method: u32 = PaymentMethod::WEIGHTED.iter().map(|(_, weight)| weight).sum();
        let status: u32 = PaymentStatus::WEIGHTED.iter().map(|(_, weight)| weight).sum();
        assert_eq!((order, method, status), (100, 100, 100));
    }
}
