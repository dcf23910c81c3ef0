//! End-to-end ingestion tests.
//!
//! Each test writes a catalog CSV fixture to the temp directory, loads it
//! through the public API, and queries the resulting catalog.

use std::fs;
use std::path::PathBuf;

use product_finder::catalog::ProductCatalog;
use product_finder::console;
use product_finder::infrastructure::csv::{self, IngestError};
use rstest::rstest;
use rust_decimal::Decimal;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "product-finder-it-{}-{name}",
        std::process::id()
    ));
    fs::write(&path, content).unwrap();
    path
}

#[rstest]
fn test_load_and_query_catalog() {
    let path = write_fixture(
        "basic.csv",
        "SKU,Price_Retail,Price_Current,Product_Name,Category\n\
         SKU002,200.00,180.00,Keyboard,Electronics\n\
         SKU001,100.00,90.00,\"Mouse, Wireless\",Electronics\n\
         SKU003,300.00,270.00,Monitor,Electronics\n",
    );

    let products = csv::read_products(&path).unwrap();
    let mut catalog = ProductCatalog::new();
    catalog.load(products);

    assert_eq!(catalog.len(), 3);

    let ascending: Vec<&str> = catalog.list_ascending().iter().map(|p| p.sku()).collect();
    assert_eq!(ascending, vec!["SKU001", "SKU002", "SKU003"]);

    let descending: Vec<&str> = catalog.list_descending().iter().map(|p| p.sku()).collect();
    assert_eq!(descending, vec!["SKU003", "SKU002", "SKU001"]);

    let mouse = catalog.find_by_sku("SKU001").unwrap();
    assert_eq!(mouse.name(), "Mouse, Wireless");
    assert_eq!(mouse.category(), "Electronics");
    assert_eq!(mouse.price_retail(), Decimal::new(10000, 2));
    assert_eq!(mouse.price_current(), Decimal::new(9000, 2));

    fs::remove_file(path).ok();
}

#[rstest]
fn test_duplicate_skus_last_row_wins() {
    let path = write_fixture(
        "duplicates.csv",
        "SKU,Price_Retail,Price_Current,Product_Name,Category\n\
         SKU001,100.00,90.00,Original,Electronics\n\
         SKU001,150.00,130.00,Replacement,Office\n",
    );

    let mut catalog = ProductCatalog::new();
    catalog.load(csv::read_products(&path).unwrap());

    assert_eq!(catalog.len(), 1);
    let product = catalog.find_by_sku("SKU001").unwrap();
    assert_eq!(product.name(), "Replacement");
    assert_eq!(product.category(), "Office");
    assert_eq!(product.price_current(), Decimal::new(13000, 2));

    fs::remove_file(path).ok();
}

#[rstest]
fn test_unusable_rows_are_skipped() {
    let path = write_fixture(
        "messy.csv",
        "SKU,Price_Retail,Price_Current,Product_Name,Category\n\
         SKU001,100.00,90.00,Mouse,Electronics\n\
         too,short\n\
         ,100.00,90.00,No Sku,Electronics\n\
         SKU002,not-a-price,80.00,Keyboard,Electronics\n",
    );

    let products = csv::read_products(&path).unwrap();
    let mut catalog = ProductCatalog::new();
    catalog.load(products);

    assert_eq!(catalog.len(), 2);
    // The malformed price fell back to zero instead of dropping the row.
    let keyboard = catalog.find_by_sku("SKU002").unwrap();
    assert_eq!(keyboard.price_retail(), Decimal::ZERO);
    assert_eq!(keyboard.price_current(), Decimal::new(8000, 2));

    fs::remove_file(path).ok();
}

#[rstest]
fn test_header_detected_by_partial_names() {
    let path = write_fixture(
        "partial-header.csv",
        "Item SKU,List Price,Sale Price,Product Name,Item Category\n\
         SKU001,100.00,90.00,Mouse,Electronics\n",
    );

    let mut catalog = ProductCatalog::new();
    catalog.load(csv::read_products(&path).unwrap());

    let product = catalog.find_by_sku("SKU001").unwrap();
    assert_eq!(product.price_retail(), Decimal::new(10000, 2));
    assert_eq!(product.price_current(), Decimal::new(9000, 2));

    fs::remove_file(path).ok();
}

#[rstest]
fn test_missing_columns_fail_the_load() {
    let path = write_fixture(
        "missing-columns.csv",
        "SKU,Product_Name\nSKU001,Mouse\n",
    );

    let result = csv::read_products(&path);
    assert!(matches!(result, Err(IngestError::MissingColumns { .. })));

    fs::remove_file(path).ok();
}

#[rstest]
fn test_empty_file_fails_the_load() {
    let path = write_fixture("empty.csv", "");

    let result = csv::read_products(&path);
    assert!(matches!(result, Err(IngestError::MissingColumns { .. })));

    fs::remove_file(path).ok();
}

#[rstest]
fn test_load_catalog_resolves_quoted_path() {
    let path = write_fixture(
        "quoted-path.csv",
        "SKU,Price_Retail,Price_Current,Product_Name,Category\n\
         SKU001,100.00,90.00,Mouse,Electronics\n",
    );

    let mut catalog = ProductCatalog::new();
    let quoted = format!("\"{}\"", path.display());
    let loaded = console::load_catalog(&mut catalog, &quoted).unwrap();

    assert_eq!(loaded, 1);
    assert!(catalog.find_by_sku("SKU001").is_some());

    fs::remove_file(path).ok();
}

#[rstest]
fn test_reload_replaces_previous_content() {
    let first = write_fixture(
        "reload-first.csv",
        "SKU,Price_Retail,Price_Current,Product_Name,Category\n\
         SKU001,100.00,90.00,Mouse,Electronics\n\
         SKU002,200.00,180.00,Keyboard,Electronics\n",
    );
    let second = write_fixture(
        "reload-second.csv",
        "SKU,Price_Retail,Price_Current,Product_Name,Category\n\
         SKU009,50.00,40.00,Cable,Accessories\n",
    );

    let mut catalog = ProductCatalog::new();
    console::load_catalog(&mut catalog, first.to_str().unwrap()).unwrap();
    assert_eq!(catalog.len(), 2);

    console::load_catalog(&mut catalog, second.to_str().unwrap()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find_by_sku("SKU001"), None);
    assert!(catalog.find_by_sku("SKU009").is_some());

    fs::remove_file(first).ok();
    fs::remove_file(second).ok();
}
