//! Interactive console menu.
//!
//! The presentation layer: a synchronous menu loop over stdin/stdout that
//! searches the catalog by SKU, pages through ordered listings, and reloads
//! the catalog from another file. The loop is generic over [`BufRead`] and
//! [`Write`] so tests can drive it with in-memory buffers.
//!
//! User-facing text goes to the output writer; diagnostics go to `tracing`.

use std::io::{self, BufRead, Write};

use crate::catalog::ProductCatalog;
use crate::infrastructure::csv::{self, IngestError};
use crate::infrastructure::{AppConfig, locate};

/// Listing direction for paginated catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

/// Resolves a user-entered path and replaces the catalog content from it.
///
/// Returns the number of distinct SKUs now in the catalog.
///
/// # Errors
///
/// Returns [`IngestError`] when the path cannot be resolved or the file
/// cannot be parsed; the catalog keeps its previous content in that case.
pub fn load_catalog(catalog: &mut ProductCatalog, raw_path: &str) -> Result<usize, IngestError> {
    let path = locate::resolve(raw_path)?;
    let products = csv::read_products(&path)?;
    Ok(catalog.load(products))
}

/// Runs the interactive menu loop until the user exits or input ends.
///
/// # Errors
///
/// Returns `io::Error` only for failures of the underlying reader/writer;
/// user mistakes (bad option, unknown SKU, unreadable file) are reported
/// on the output and the loop continues.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut ProductCatalog,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        print_menu(output)?;

        let Some(line) = prompt(input, output, "\nEnter an option: ")? else {
            break;
        };
        let Ok(option) = line.parse::<u32>() else {
            writeln!(output, "Invalid input. Please enter a number.")?;
            continue;
        };

        match option {
            1 => search_product(catalog, input, output)?,
            2 => list_products(catalog, config, input, output, SortOrder::Ascending)?,
            3 => list_products(catalog, config, input, output, SortOrder::Descending)?,
            4 => reload_catalog(catalog, input, output)?,
            5 => break,
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }

    Ok(())
}

fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n===== MAIN MENU =====")?;
    writeln!(output, "1. Search product by SKU")?;
    writeln!(output, "2. List products (ascending by SKU)")?;
    writeln!(output, "3. List products (descending by SKU)")?;
    writeln!(output, "4. Load another CSV file")?;
    writeln!(output, "5. Exit")?;
    Ok(())
}

/// Writes a prompt and reads one trimmed line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn search_product<R: BufRead, W: Write>(
    catalog: &ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(sku) = prompt(input, output, "\nEnter the product SKU: ")? else {
        return Ok(());
    };

    match catalog.find_by_sku(&sku) {
        Some(product) => {
            writeln!(output, "\n===== PRODUCT FOUND =====")?;
            writeln!(output, "{product}")?;

            writeln!(output, "\nPrice details:")?;
            writeln!(output, "- Retail price: ${:.2}", product.price_retail())?;
            writeln!(output, "- Current price: ${:.2}", product.price_current())?;
            if let Some(savings) = product.savings() {
                writeln!(
                    output,
                    "- You save: ${:.2} ({:.2}%)",
                    savings.amount, savings.percent
                )?;
            }
        }
        None => writeln!(output, "\nNo product found with SKU: {sku}")?,
    }

    Ok(())
}

fn list_products<R: BufRead, W: Write>(
    catalog: &ProductCatalog,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
    order: SortOrder,
) -> io::Result<()> {
    let products = match order {
        SortOrder::Ascending => catalog.list_ascending(),
        SortOrder::Descending => catalog.list_descending(),
    };

    if products.is_empty() {
        writeln!(output, "\nNo products loaded.")?;
        return Ok(());
    }

    writeln!(output, "\n===== PRODUCTS ({} ORDER BY SKU) =====", order.label())?;
    writeln!(output, "Total products: {}", products.len())?;

    let page_size = config.page_size.max(1);
    let total_pages = products.len().div_ceil(page_size);
    let mut current_page = 1;

    while current_page <= total_pages {
        writeln!(output, "\nPage {current_page} of {total_pages}")?;

        let start = (current_page - 1) * page_size;
        let end = (start + page_size).min(products.len());
        for (offset, product) in products[start..end].iter().enumerate() {
            writeln!(output, "{}. {product}", start + offset + 1)?;
        }

        if current_page < total_pages {
            let Some(answer) = prompt(input, output, "\n[N]ext page, [Q]uit to menu: ")? else {
                break;
            };
            let answer = answer.to_lowercase();
            if answer == "q" || answer == "quit" {
                break;
            }
            current_page += 1;
        } else {
            prompt(input, output, "\nPress ENTER to return to the menu...")?;
            break;
        }
    }

    Ok(())
}

fn reload_catalog<R: BufRead, W: Write>(
    catalog: &mut ProductCatalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(raw_path) = prompt(input, output, "\nEnter the path of the catalog CSV file: ")?
    else {
        return Ok(());
    };

    writeln!(output, "Loading products...")?;
    match load_catalog(catalog, &raw_path) {
        Ok(count) => writeln!(output, "Loaded {count} products into the catalog.")?,
        Err(error) => {
            tracing::error!("Catalog load failed: {error}");
            writeln!(output, "Failed to load the file: {error}")?;
            writeln!(output, "Check that the file exists and has the expected format.")?;
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn catalog_with(entries: &[(&str, &str)]) -> ProductCatalog {
        let mut catalog = ProductCatalog::new();
        catalog.load(entries.iter().map(|(sku, name)| {
            Product::create(sku, Decimal::new(20000, 2), Decimal::new(15000, 2), name, "Test")
                .unwrap()
        }));
        catalog
    }

    fn run_with_input(catalog: &mut ProductCatalog, config: &AppConfig, input: &str) -> String {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        run(catalog, config, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    fn test_exit_option_terminates() {
        let mut catalog = ProductCatalog::new();
        let output = run_with_input(&mut catalog, &AppConfig::default(), "5\n");

        assert!(output.contains("===== MAIN MENU ====="));
    }

    #[rstest]
    fn test_end_of_input_terminates() {
        let mut catalog = ProductCatalog::new();
        let output = run_with_input(&mut catalog, &AppConfig::default(), "");

        assert!(output.contains("===== MAIN MENU ====="));
    }

    #[rstest]
    fn test_rejects_non_numeric_and_unknown_options() {
        let mut catalog = ProductCatalog::new();
        let output = run_with_input(&mut catalog, &AppConfig::default(), "abc\n9\n5\n");

        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Invalid option. Please try again."));
    }

    #[rstest]
    fn test_search_finds_product_with_savings() {
        let mut catalog = catalog_with(&[("SKU001", "Wireless Mouse")]);
        let output = run_with_input(&mut catalog, &AppConfig::default(), "1\nSKU001\n5\n");

        assert!(output.contains("===== PRODUCT FOUND ====="));
        assert!(output.contains("SKU: SKU001 | Name: Wireless Mouse"));
        assert!(output.contains("- Retail price: $200.00"));
        assert!(output.contains("- Current price: $150.00"));
        assert!(output.contains("- You save: $50.00 (25.00%)"));
    }

    #[rstest]
    fn test_search_reports_unknown_sku() {
        let mut catalog = catalog_with(&[("SKU001", "Wireless Mouse")]);
        let output = run_with_input(&mut catalog, &AppConfig::default(), "1\nSKU999\n5\n");

        assert!(output.contains("No product found with SKU: SKU999"));
    }

    #[rstest]
    fn test_listing_empty_catalog() {
        let mut catalog = ProductCatalog::new();
        let output = run_with_input(&mut catalog, &AppConfig::default(), "2\n5\n");

        assert!(output.contains("No products loaded."));
    }

    #[rstest]
    fn test_listing_single_page() {
        let mut catalog = catalog_with(&[("SKU002", "B"), ("SKU001", "A"), ("SKU003", "C")]);
        let output = run_with_input(&mut catalog, &AppConfig::default(), "2\n\n5\n");

        assert!(output.contains("===== PRODUCTS (ASCENDING ORDER BY SKU) ====="));
        assert!(output.contains("Total products: 3"));
        assert!(output.contains("Page 1 of 1"));
        assert!(output.contains("1. SKU: SKU001"));
        assert!(output.contains("2. SKU: SKU002"));
        assert!(output.contains("3. SKU: SKU003"));
        assert!(output.contains("Press ENTER to return to the menu..."));
    }

    #[rstest]
    fn test_listing_descending_order() {
        let mut catalog = catalog_with(&[("SKU001", "A"), ("SKU002", "B")]);
        let output = run_with_input(&mut catalog, &AppConfig::default(), "3\n\n5\n");

        assert!(output.contains("===== PRODUCTS (DESCENDING ORDER BY SKU) ====="));
        let first = output.find("1. SKU: SKU002").expect("SKU002 listed first");
        let second = output.find("2. SKU: SKU001").expect("SKU001 listed second");
        assert!(first < second);
    }

    #[rstest]
    fn test_pagination_next_and_quit() {
        let entries: Vec<(String, String)> = (1..=25)
            .map(|index| (format!("SKU{index:03}"), format!("Product {index}")))
            .collect();
        let mut catalog = ProductCatalog::new();
        catalog.load(entries.iter().map(|(sku, name)| {
            Product::create(sku, Decimal::ZERO, Decimal::ZERO, name, "Test").unwrap()
        }));

        let output = run_with_input(&mut catalog, &AppConfig::default(), "2\nn\nq\n5\n");

        assert!(output.contains("Page 1 of 3"));
        assert!(output.contains("Page 2 of 3"));
        assert!(!output.contains("Page 3 of 3"));
        assert!(output.contains("11. SKU: SKU011"));
    }

    #[rstest]
    fn test_reload_with_unresolvable_path() {
        let mut catalog = catalog_with(&[("SKU001", "Keep Me")]);
        let missing = std::env::temp_dir().join("product-finder-console-missing.csv");
        let input = format!("4\n{}\n5\n", missing.display());

        let output = run_with_input(&mut catalog, &AppConfig::default(), &input);

        assert!(output.contains("Failed to load the file:"));
        // A failed load leaves the previous catalog intact.
        assert!(catalog.find_by_sku("SKU001").is_some());
    }
}
