//! Generic ordered containers.
//!
//! This module provides [`SearchTree`], the ordered-key container backing
//! the product catalog: a binary search tree keyed by the element type's
//! total order, supporting upsert insertion, exact-key search, and
//! ascending/descending in-order iteration.
//!
//! # Examples
//!
//! ```rust
//! use product_finder::collection::SearchTree;
//!
//! let mut tree = SearchTree::new();
//! tree.insert("SKU002");
//! tree.insert("SKU001");
//!
//! let keys: Vec<&&str> = tree.iter().collect();
//! assert_eq!(keys, vec![&"SKU001", &"SKU002"]);
//! ```

mod search_tree;

pub use search_tree::{SearchTree, SearchTreeDescendingIterator, SearchTreeIterator};
