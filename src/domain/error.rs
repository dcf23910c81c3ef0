//! Validation error type for domain values.

use thiserror::Error;

/// Error raised when a domain value fails validation.
///
/// Carries the name of the offending field and a human-readable message.
///
/// # Examples
///
/// ```
/// use product_finder::domain::ValidationError;
///
/// let error = ValidationError::new("Sku", "must not be empty");
/// assert_eq!(error.to_string(), "Sku: must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field where the error occurred
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
