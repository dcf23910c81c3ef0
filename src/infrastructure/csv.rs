//! Delimited catalog file ingestion.
//!
//! Reads a product catalog from a comma-delimited UTF-8 text file. The
//! first line is a header; the reader detects the five required columns by
//! name (exact name first, then substring fallback), so column order in the
//! file does not matter. Data rows that cannot yield a product (too few
//! fields, blank SKU) are skipped with a log entry and never abort the
//! load.
//!
//! Field splitting honors double quotes: commas inside a quoted field do
//! not split. Unparsable prices fall back to zero rather than failing the
//! row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::Product;

// =============================================================================
// IngestError
// =============================================================================

/// Error types for catalog ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the catalog file failed.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The header is missing one or more required columns.
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Names of the columns that could not be located.
        columns: Vec<String>,
    },

    /// No catalog file could be resolved from the given input.
    #[error("Could not find catalog file: {path}")]
    FileNotFound {
        /// The path as entered by the user.
        path: String,
    },
}

impl IngestError {
    /// Creates a `MissingColumns` error.
    #[must_use]
    pub fn missing_columns(columns: Vec<String>) -> Self {
        Self::MissingColumns { columns }
    }

    /// Creates a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// =============================================================================
// Column Layout
// =============================================================================

/// Canonical header names of the five required columns.
const SKU_COLUMN: &str = "SKU";
const PRICE_RETAIL_COLUMN: &str = "Price_Retail";
const PRICE_CURRENT_COLUMN: &str = "Price_Current";
const PRODUCT_NAME_COLUMN: &str = "Product_Name";
const CATEGORY_COLUMN: &str = "Category";

/// Field indices of the required columns within a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    sku: usize,
    price_retail: usize,
    price_current: usize,
    name: usize,
    category: usize,
}

impl ColumnLayout {
    /// Detects the required columns in a header row.
    ///
    /// A first pass matches the canonical names case-insensitively and
    /// exactly. A second pass resolves columns still missing by substring:
    /// `sku`; `retail` or `list price`; `current`, `sale price`, or a bare
    /// `price` not already claimed as the retail column; `product` together
    /// with `name`; `category`.
    fn detect(header: &[String]) -> Result<Self, IngestError> {
        let lowered: Vec<String> = header.iter().map(|cell| cell.to_lowercase()).collect();

        let exact = |canonical: &str| {
            header
                .iter()
                .position(|cell| cell.eq_ignore_ascii_case(canonical))
        };

        let mut sku = exact(SKU_COLUMN);
        let mut price_retail = exact(PRICE_RETAIL_COLUMN);
        let mut price_current = exact(PRICE_CURRENT_COLUMN);
        let mut name = exact(PRODUCT_NAME_COLUMN);
        let mut category = exact(CATEGORY_COLUMN);

        let partial = |matches: &dyn Fn(usize, &str) -> bool| {
            lowered
                .iter()
                .enumerate()
                .position(|(index, cell)| matches(index, cell))
        };

        if sku.is_none() {
            sku = partial(&|_, cell| cell.contains("sku"));
        }
        if price_retail.is_none() {
            price_retail =
                partial(&|_, cell| cell.contains("retail") || cell.contains("list price"));
        }
        if price_current.is_none() {
            price_current = partial(&|index, cell| {
                cell.contains("current")
                    || cell.contains("sale price")
                    || (cell.contains("price") && Some(index) != price_retail)
            });
        }
        if name.is_none() {
            name = partial(&|_, cell| cell.contains("product") && cell.contains("name"));
        }
        if category.is_none() {
            category = partial(&|_, cell| cell.contains("category"));
        }

        match (sku, price_retail, price_current, name, category) {
            (Some(sku), Some(price_retail), Some(price_current), Some(name), Some(category)) => {
                Ok(Self {
                    sku,
                    price_retail,
                    price_current,
                    name,
                    category,
                })
            }
            _ => {
                let mut missing = Vec::new();
                for (index, canonical) in [
                    (sku, SKU_COLUMN),
                    (price_retail, PRICE_RETAIL_COLUMN),
                    (price_current, PRICE_CURRENT_COLUMN),
                    (name, PRODUCT_NAME_COLUMN),
                    (category, CATEGORY_COLUMN),
                ] {
                    if index.is_none() {
                        missing.push(canonical.to_string());
                    }
                }
                Err(IngestError::missing_columns(missing))
            }
        }
    }

    /// Highest field index a data row must reach to be usable.
    fn widest_index(&self) -> usize {
        self.sku
            .max(self.price_retail)
            .max(self.price_current)
            .max(self.name)
            .max(self.category)
    }
}

// =============================================================================
// Reading
// =============================================================================

/// Reads all products from a delimited catalog file.
///
/// Rows that cannot yield a product are skipped with a warning; the result
/// preserves file order (duplicated SKUs are resolved later, at catalog
/// load time, where the last occurrence wins).
///
/// # Errors
///
/// Returns [`IngestError`] when the file cannot be read, is empty, or its
/// header lacks a required column.
pub fn read_products(path: &Path) -> Result<Vec<Product>, IngestError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(IngestError::missing_columns(vec![
                SKU_COLUMN.to_string(),
                PRICE_RETAIL_COLUMN.to_string(),
                PRICE_CURRENT_COLUMN.to_string(),
                PRODUCT_NAME_COLUMN.to_string(),
                CATEGORY_COLUMN.to_string(),
            ]));
        }
    };

    let header = split_record(&header_line);
    let layout = ColumnLayout::detect(&header)?;
    tracing::debug!(
        sku = layout.sku,
        price_retail = layout.price_retail,
        price_current = layout.price_current,
        name = layout.name,
        category = layout.category,
        "Detected catalog columns"
    );

    let mut products = Vec::new();
    for line in lines {
        let line = line?;
        let fields = split_record(&line);

        if fields.len() <= layout.widest_index() {
            tracing::warn!("Skipping malformed row: {line}");
            continue;
        }

        let sku = &fields[layout.sku];
        if sku.is_empty() {
            tracing::debug!("Skipping row with blank SKU: {line}");
            continue;
        }

        let price_retail = parse_price(&fields[layout.price_retail]);
        let price_current = parse_price(&fields[layout.price_current]);

        match Product::create(
            sku,
            price_retail,
            price_current,
            &fields[layout.name],
            &fields[layout.category],
        ) {
            Ok(product) => products.push(product),
            Err(error) => tracing::warn!("Skipping invalid row: {error}"),
        }
    }

    tracing::info!("Parsed {} products from {}", products.len(), path.display());
    Ok(products)
}

/// Splits one delimited line into cleaned fields.
///
/// Commas inside double-quoted sections do not split. Every field is
/// stripped of surrounding quotes and whitespace. Trailing empty fields
/// are preserved.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for character in line.chars() {
        match character {
            '"' => {
                in_quotes = !in_quotes;
                current.push(character);
            }
            ',' if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            _ => current.push(character),
        }
    }
    fields.push(clean_field(&current));

    fields
}

/// Trims a raw field and strips one pair of surrounding double quotes.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Parses a price field, falling back to zero on malformed input.
fn parse_price(field: &str) -> Decimal {
    Decimal::from_str(field).unwrap_or(Decimal::ZERO)
}

// =============================================================================
// Tests
// =============================================================================
