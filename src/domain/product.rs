//! Product value type.
//!
//! A retail catalog entry identified by its SKU. The SKU is both the
//! identity and the sort key: ordering, equality, and hashing all delegate
//! to it, and the descriptive fields (prices, name, category) never
//! participate in comparisons. This keeps the ordering consistent with
//! equality, which the catalog's search tree relies on.
//!
//! Prices use [`Decimal`] for exact arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use super::error::ValidationError;

// =============================================================================
// Product
// =============================================================================

/// A retail product identified by its SKU.
///
/// Constructed through the [`create`] smart constructor, which trims every
/// string field and rejects a SKU that is empty after trimming. Descriptive
/// fields may be empty. A product is immutable once constructed; re-loading
/// a catalog entry with the same SKU replaces the whole value.
///
/// [`create`]: Product::create
///
/// # Examples
///
/// ```rust
/// use product_finder::domain::Product;
/// use rust_decimal::Decimal;
///
/// let product = Product::create(
///     " SKU001 ",
///     Decimal::new(10000, 2),
///     Decimal::new(9000, 2),
///     "Wireless Mouse",
///     "Electronics",
/// )
/// .unwrap();
///
/// assert_eq!(product.sku(), "SKU001");
///
/// // A blank SKU is rejected
/// assert!(Product::create("  ", Decimal::ZERO, Decimal::ZERO, "", "").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Product {
    sku: String,
    price_retail: Decimal,
    price_current: Decimal,
    name: String,
    category: String,
}

impl Product {
    /// Field name used in validation error messages.
    const SKU_FIELD: &'static str = "Sku";

    /// Creates a `Product` from its SKU and descriptive fields.
    ///
    /// All string fields are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the SKU is empty after trimming.
    pub fn create(
        sku: &str,
        price_retail: Decimal,
        price_current: Decimal,
        name: &str,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(ValidationError::new(
                Self::SKU_FIELD,
                "must not be empty or blank",
            ));
        }

        Ok(Self {
            sku: sku.to_string(),
            price_retail,
            price_current,
            name: name.trim().to_string(),
            category: category.trim().to_string(),
        })
    }

    /// Creates a search probe carrying only a SKU.
    ///
    /// The probe has zero prices and empty descriptive fields; since
    /// comparisons delegate to the SKU alone, it matches the stored product
    /// with the same SKU regardless of the other fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the SKU is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use product_finder::domain::Product;
    ///
    /// let probe = Product::lookup("SKU001").unwrap();
    /// assert_eq!(probe.sku(), "SKU001");
    /// assert_eq!(probe.name(), "");
    /// ```
    pub fn lookup(sku: &str) -> Result<Self, ValidationError> {
        Self::create(sku, Decimal::ZERO, Decimal::ZERO, "", "")
    }

    /// Returns the SKU.
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the retail (list) price.
    #[must_use]
    pub const fn price_retail(&self) -> Decimal {
        self.price_retail
    }

    /// Returns the current (sale) price.
    #[must_use]
    pub const fn price_current(&self) -> Decimal {
        self.price_current
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the discount breakdown against the retail price.
    ///
    /// Present only when the current price is strictly below the retail
    /// price and the retail price is positive; the percentage is always
    /// computed against the retail price.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use product_finder::domain::Product;
    /// use rust_decimal::Decimal;
    ///
    /// let product = Product::create(
    ///     "SKU001",
    ///     Decimal::new(20000, 2), // 200.00
    ///     Decimal::new(15000, 2), // 150.00
    ///     "Desk Lamp",
    ///     "Home",
    /// )
    /// .unwrap();
    ///
    /// let savings = product.savings().unwrap();
    /// assert_eq!(savings.amount, Decimal::new(5000, 2)); // 50.00
    /// assert_eq!(savings.percent, Decimal::new(25, 0));  // 25%
    /// ```
    #[must_use]
    pub fn savings(&self) -> Option<Savings> {
        let amount = self.price_retail - self.price_current;
        if amount <= Decimal::ZERO || self.price_retail <= Decimal::ZERO {
            return None;
        }

        let percent = amount.checked_div(self.price_retail)? * Decimal::ONE_HUNDRED;
        Some(Savings { amount, percent })
    }
}

/// Discount of a product's current price against its retail price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Savings {
    /// Absolute discount (retail minus current price)
    pub amount: Decimal,
    /// Discount as a percentage of the retail price
    pub percent: Decimal,
}

// =============================================================================
// Identity and Ordering
// =============================================================================

// Identity and ordering delegate to the SKU only.

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.sku == other.sku
    }
}

impl Eq for Product {}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sku.cmp(&other.sku)
    }
}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sku.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "SKU: {} | Name: {} | Category: {} | Retail: ${:.2} | Current: ${:.2}",
            self.sku, self.name, self.category, self.price_retail, self.price_current
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
