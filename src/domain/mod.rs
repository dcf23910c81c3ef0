//! Domain value types for the product catalog.
//!
//! Values are built through smart constructors that validate and normalize
//! their input, so only well-formed values circulate through the catalog:
//!
//! - [`Product`]: a retail catalog entry identified by its SKU
//! - [`Savings`]: the discount breakdown of a product
//! - [`ValidationError`]: the error raised by failed validation
//!
//! # Examples
//!
//! ```rust
//! use product_finder::domain::Product;
//! use rust_decimal::Decimal;
//!
//! let product = Product::create(
//!     "SKU001",
//!     Decimal::new(10000, 2),
//!     Decimal::new(9000, 2),
//!     "Wireless Mouse",
//!     "Electronics",
//! )
//! .unwrap();
//!
//! assert_eq!(product.sku(), "SKU001");
//! ```

mod error;
mod product;

pub use error::ValidationError;
pub use product::{Product, Savings};
