use std::fs;
use std::path::PathBuf;

use shopgen_cli::{
    CONFIG_FILE_NAME, CliError, ShopgenConfig, format_report, load_config, run_generate, run_load,
    run_report,
};
use shopgen_store::StoreError;

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shopgen_cli_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[tokio::test]
async fn generate_load_report_end_to_end() {
    let dir = temp_dir("pipeline");
    let config = ShopgenConfig::default();

    let generated = run_generate(dir.clone(), &config).expect("generate");
    let (db_path, summary) = run_load(&dir, &config).await.expect("load");
    assert_eq!(db_path, dir.join("ecommerce.db"));
    assert_eq!(summary.rows("customers"), Some(120));

    let rows = run_report(&db_path).await.expect("report");
    assert_eq!(rows.len(), generated.dataset.order_items.len());

    let output = format_report(&rows);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("customer_name"));
    assert_eq!(lines[6], format!("{} rows returned.", rows.len()));
}

#[tokio::test]
async fn load_without_csvs_creates_no_database() {
    let dir = temp_dir("empty");
    let config = ShopgenConfig::default();

    let err = run_load(&dir, &config).await.expect_err("no row-sets");

    assert!(matches!(
        err,
        CliError::Store(StoreError::MissingInput { ref path }) if path.ends_with("customers.csv")
    ));
    assert!(!dir.join("ecommerce.db").exists());
}

#[tokio::test]
async fn report_on_missing_database_fails() {
    let dir = temp_dir("no_db");

    let err = run_report(&dir.join("ecommerce.db"))
        .await
        .expect_err("database missing");

    assert!(matches!(err, CliError::Store(StoreError::MissingInput { .. })));
}

#[test]
fn config_file_drives_generation() {
    let dir = temp_dir("config");
    fs::write(
        dir.join(CONFIG_FILE_NAME),
        "[generate]\ncustomers = 10\nproducts = 6\norders = 4\n",
    )
    .expect("write config");

    let config = load_config(&dir).expect("config");
    let result = run_generate(dir.join("out"), &config).expect("generate");

    assert_eq!(result.dataset.customers.len(), 10);
    assert_eq!(result.dataset.products.len(), 6);
    assert_eq!(result.dataset.orders.len(), 4);
}

#[test]
fn malformed_config_names_the_file() {
    let dir = temp_dir("bad_config");
    fs::write(dir.join(CONFIG_FILE_NAME), "[generate\nseed = 1\n").expect("write config");

    let err = load_config(&dir).expect_err("malformed");

    match err {
        CliError::Config { path, .. } => assert_eq!(path, dir.join(CONFIG_FILE_NAME)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_config_uses_defaults() {
    let dir = temp_dir("no_config");
    assert_eq!(load_config(&dir).expect("config"), ShopgenConfig::default());
}
