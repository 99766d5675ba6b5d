use std::fs;
use std::path::PathBuf;

use shopgen_core::EntityKind;
use shopgen_generate::{
    EntityCounts, GenerateOptions, GenerationEngine, GenerationError, REPORT_FILE_NAME,
};

fn options(label: &str, seed: u64) -> GenerateOptions {
    GenerateOptions {
        out_dir: temp_out_dir(label),
        seed,
        ..GenerateOptions::default()
    }
}

fn read_csv(dir: &PathBuf, kind: EntityKind) -> String {
    fs::read_to_string(dir.join(kind.csv_file_name()))
        .unwrap_or_else(|_| panic!("missing {}", kind.csv_file_name()))
}

#[test]
fn generate_is_deterministic() {
    let result_a = GenerationEngine::new(options("run_a", 42))
        .run()
        .expect("run generation A");
    let result_b = GenerationEngine::new(options("run_b", 42))
        .run()
        .expect("run generation B");

    for kind in EntityKind::ALL {
        assert_eq!(
            read_csv(&result_a.out_dir, kind),
            read_csv(&result_b.out_dir, kind),
            "{} should be deterministic",
            kind.csv_file_name()
        );
    }
}

#[test]
fn different_seeds_produce_different_rows() {
    let result_a = GenerationEngine::new(options("seed_a", 1))
        .run()
        .expect("run generation A");
    let result_b = GenerationEngine::new(options("seed_b", 2))
        .run()
        .expect("run generation B");

    assert_ne!(
        read_csv(&result_a.out_dir, EntityKind::Customers),
        read_csv(&result_b.out_dir, EntityKind::Customers)
    );
}

#[test]
fn generate_respects_row_counts() {
    let result = GenerationEngine::new(options("run_rows", 42))
        .run()
        .expect("run generation");

    let report_path = result.out_dir.join(REPORT_FILE_NAME);
    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(&report_path).expect("read generation_report.json"),
    )
    .expect("parse report");

    let rows_generated = |table: &str| -> u64 {
        report
            .get("tables")
            .and_then(|value| value.as_array())
            .expect("tables array")
            .iter()
            .find(|entry| entry.get("table") == Some(&serde_json::Value::String(table.into())))
            .and_then(|entry| entry.get("rows_generated"))
            .and_then(|value| value.as_u64())
            .unwrap_or_else(|| panic!("rows_generated for {table}"))
    };

    assert_eq!(rows_generated("customers"), 120);
    assert_eq!(rows_generated("products"), 80);
    assert_eq!(rows_generated("orders"), 160);
    assert_eq!(rows_generated("payments"), 160);
    assert_eq!(
        rows_generated("order_items"),
        result.dataset.order_items.len() as u64
    );

    // Header plus one line per row; generated text never embeds newlines.
    let orders_csv = read_csv(&result.out_dir, EntityKind::Orders);
    assert_eq!(orders_csv.lines().count(), 161);
    assert!(orders_csv.starts_with(
        "order_id,customer_id,order_date,shipping_address,status,total_amount\n"
    ));
}

#[test]
fn zero_orders_still_writes_headers() {
    let mut options = options("run_empty", 42);
    options.counts = EntityCounts {
        customers: 3,
        products: 5,
        orders: 0,
    };

    let result = GenerationEngine::new(options).run().expect("run generation");

    let items_csv = read_csv(&result.out_dir, EntityKind::OrderItems);
    assert_eq!(
        items_csv,
        "order_item_id,order_id,product_id,quantity,unit_price,line_total\n"
    );
    assert!(result.dataset.payments.is_empty());
}

#[test]
fn small_catalog_aborts_before_writing() {
    let mut options = options("run_small_catalog", 42);
    options.counts.products = 4;
    let out_dir = options.out_dir.clone();

    let err = GenerationEngine::new(options)
        .run()
        .expect_err("catalog below five products");

    assert!(matches!(err, GenerationError::Precondition(_)), "{err}");
    assert!(!out_dir.join(EntityKind::Customers.csv_file_name()).exists());
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "shopgen_generate_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
