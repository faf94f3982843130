//! Error types for the catalog plugin.
//!
//! This module defines the crate-wide error type [`CatalogError`] and a
//! [`Result`] alias. Errors are derived with `thiserror`. The only error a user
//! can trigger at runtime is a form validation failure, which is carried by
//! [`ValidationErrors`](crate::form::ValidationErrors) and recovered locally by
//! the form; the remaining variants cover startup concerns (fixture, theme,
//! configuration) and programming mistakes such as editing an unknown id.

use crate::domain::product::ProductId;
use crate::form::ValidationErrors;
use thiserror::Error;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use zcatalog::domain::CatalogError;
///
/// let err = CatalogError::Fixture("duplicate product id 3".to_string());
/// assert_eq!(err.to_string(), "Fixture error: duplicate product id 3");
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product fixture could not be parsed or violates catalog invariants.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Filesystem read failed (fixture or theme file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No product with the given id exists in the catalog.
    #[error("Product not found: #{0}")]
    NotFound(ProductId),

    /// Every product id up to `u32::MAX` has been handed out.
    #[error("No product ids left to assign")]
    IdsExhausted,

    /// A form submission failed validation.
    ///
    /// Never fatal. The form keeps its draft and displays the messages.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
