//! Product Finder
//!
//! Console utility for searching a retail product catalog by SKU. The
//! catalog is loaded from a delimited CSV file into an in-memory binary
//! search tree and queried interactively: point lookups by SKU and
//! paginated listings in ascending or descending SKU order.
//!
//! # Architecture
//!
//! The crate is layered, outermost last:
//!
//! - **Collection**: [`collection::SearchTree`], the generic ordered
//!   container every query runs against
//! - **Domain**: validated value types ([`domain::Product`])
//! - **Catalog**: the query façade ([`catalog::ProductCatalog`])
//! - **Infrastructure**: configuration, path resolution, CSV ingestion
//! - **Console**: the interactive menu loop
//!
//! # Examples
//!
//! ```rust
//! use product_finder::catalog::ProductCatalog;
//! use product_finder::domain::Product;
//! use rust_decimal::Decimal;
//!
//! let mut catalog = ProductCatalog::new();
//! catalog.load(vec![
//!     Product::create("SKU002", Decimal::ZERO, Decimal::ZERO, "Second", "").unwrap(),
//!     Product::create("SKU001", Decimal::ZERO, Decimal::ZERO, "First", "").unwrap(),
//! ]);
//!
//! assert_eq!(catalog.find_by_sku("SKU002").unwrap().name(), "Second");
//! let skus: Vec<&str> = catalog.list_ascending().iter().map(|p| p.sku()).collect();
//! assert_eq!(skus, vec!["SKU001", "SKU002"]);
//! ```

pub mod catalog;
pub mod collection;
pub mod console;
pub mod domain;
pub mod infrastructure;
