//! Catalog façade binding the search tree to the product domain.
//!
//! [`ProductCatalog`] owns one [`SearchTree`] of [`Product`] values and
//! translates domain queries (lookup by SKU, ordered listings) into
//! container operations. It performs no I/O; ingestion hands it an already
//! parsed sequence of products.

use crate::collection::SearchTree;
use crate::domain::Product;

/// In-memory product catalog ordered by SKU.
///
/// Loading replaces the entire content: the backing tree is cleared and the
/// supplied entries are inserted in input order, so when the input repeats a
/// SKU the later entry wins. Lookups and listings never mutate the catalog.
///
/// # Examples
///
/// ```rust
/// use product_finder::catalog::ProductCatalog;
/// use product_finder::domain::Product;
/// use rust_decimal::Decimal;
///
/// let mut catalog = ProductCatalog::new();
/// catalog.load(vec![
///     Product::create("SKU002", Decimal::ZERO, Decimal::ZERO, "Second", "").unwrap(),
///     Product::create("SKU001", Decimal::ZERO, Decimal::ZERO, "First", "").unwrap(),
/// ]);
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.find_by_sku("SKU001").unwrap().name(), "First");
///
/// let skus: Vec<&str> = catalog.list_ascending().iter().map(|p| p.sku()).collect();
/// assert_eq!(skus, vec!["SKU001", "SKU002"]);
/// ```
pub struct ProductCatalog {
    products: SearchTree<Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: SearchTree::new(),
        }
    }

    /// Replaces the catalog content with the supplied entries.
    ///
    /// The existing content is cleared first; entries are then inserted in
    /// input order, so a SKU that repeats in the input ends up with its last
    /// occurrence. Returns the number of distinct SKUs loaded.
    pub fn load(&mut self, entries: impl IntoIterator<Item = Product>) -> usize {
        self.products.clear();
        self.products.extend(entries);
        self.products.len()
    }

    /// Looks up a product by its SKU.
    ///
    /// A key that is empty after trimming returns `None` without error, as
    /// does a SKU not present in the catalog.
    #[must_use]
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        let probe = Product::lookup(sku).ok()?;
        self.products.find(&probe)
    }

    /// Returns every product in ascending SKU order.
    #[must_use]
    pub fn list_ascending(&self) -> Vec<&Product> {
        self.products.iter().collect()
    }

    /// Returns every product in descending SKU order.
    #[must_use]
    pub fn list_descending(&self) -> Vec<&Product> {
        self.products.iter_descending().collect()
    }

    /// Returns the number of products in the catalog.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Removes every product from the catalog.
    pub fn clear(&mut self) {
        self.products.clear();
    }
}

impl Default for ProductCatalog {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
