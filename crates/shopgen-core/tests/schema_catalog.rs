use chrono::NaiveDate;
use shopgen_core::{
    Customer, EntityKind, Order, OrderItem, OrderStatus, Payment, PaymentMethod, PaymentStatus,
    Product, ProductCategory, ecommerce_schema, validate_schema,
};
use serde::Serialize;

fn header_of<T: Serialize>(record: &T) -> Vec<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(record).expect("serialize record");
    let bytes = writer.into_inner().expect("flush csv");
    let text = String::from_utf8(bytes).expect("utf8 csv");
    text.lines()
        .next()
        .expect("header line")
        .split(',')
        .map(|name| name.to_string())
        .collect()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

#[test]
fn catalog_is_consistent() {
    let schema = ecommerce_schema();
    validate_schema(&schema).expect("catalog should validate");

    for kind in EntityKind::ALL {
        assert!(
            schema.table(kind.table_name()).is_some(),
            "missing table for {kind}"
        );
    }
}

#[test]
fn csv_headers_match_catalog_columns() {
    let schema = ecommerce_schema();
    let columns = |kind: EntityKind| -> Vec<String> {
        schema
            .table(kind.table_name())
            .expect("table")
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    };

    let customer = Customer {
        customer_id: 1,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        country: "United Kingdom".to_string(),
        signup_date: date(),
    };
    let product = Product {
        product_id: 1,
        product_name: "Analytical engine".to_string(),
        category: ProductCategory::Electronics,
        price: 99.5,
        stock_quantity: 10,
        created_at: date(),
    };
    let order = Order {
        order_id: 1,
        customer_id: 1,
        order_date: date(),
        shipping_address: "1 Main St".to_string(),
        status: OrderStatus::Shipped,
        total_amount: 99.5,
    };
    let item = OrderItem {
        order_item_id: 1,
        order_id: 1,
        product_id: 1,
        quantity: 1,
        unit_price: 99.5,
        line_total: 99.5,
    };
    let payment = Payment {
        payment_id: 1,
        order_id: 1,
        payment_date: date(),
        payment_method: PaymentMethod::Paypal,
        amount: 99.5,
        currency: "USD".to_string(),
        status: PaymentStatus::Completed,
    };

    assert_eq!(header_of(&customer), columns(EntityKind::Customers));
    assert_eq!(header_of(&product), columns(EntityKind::Products));
    assert_eq!(header_of(&order), columns(EntityKind::Orders));
    assert_eq!(header_of(&item), columns(EntityKind::OrderItems));
    assert_eq!(header_of(&payment), columns(EntityKind::Payments));
}

#[test]
fn rejects_dangling_foreign_key() {
    let mut schema = ecommerce_schema();
    schema.tables.retain(|table| table.name != "customers");

    let err = validate_schema(&schema).expect_err("orders references customers");
    assert!(err.to_string().contains("referenced table not found: customers"));
}
