//! Product domain model.
//!
//! A [`Product`] is one committed catalog record. [`ProductFields`] is the same
//! record without its identifier; it is what a validated form emits and what
//! the catalog stores on create or edit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol prefixed to prices in every view.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Unique, immutable product identifier.
///
/// Identifiers are positive and assigned by the catalog; they are never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed catalog record.
///
/// The JSON shape matches the bundled fixture:
///
/// ```json
/// { "id": 1, "name": "Apple", "price": 10, "category": "Fruit", "stock": 5, "description": "" }
/// ```
///
/// `stock` and `description` may be omitted and default to `0` and `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Builds a product from an id and validated fields.
    #[must_use]
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            category: fields.category,
            stock: fields.stock,
            description: fields.description,
        }
    }

    /// Returns the editable fields of this product.
    #[must_use]
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            category: self.category.clone(),
            stock: self.stock,
            description: self.description.clone(),
        }
    }

    /// Formats the price for display, e.g. `₹10` or `₹12.5`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcatalog::domain::{Product, ProductFields, ProductId};
    ///
    /// let fields = ProductFields {
    ///     name: "Apple".into(),
    ///     price: 12.5,
    ///     category: "Fruit".into(),
    ///     stock: 0,
    ///     description: String::new(),
    /// };
    /// let product = Product::from_fields(ProductId(1), fields);
    /// assert_eq!(product.display_price(), "₹12.5");
    /// ```
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{CURRENCY_SYMBOL}{}", self.price)
    }
}

/// Validated product data without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub description: String,
}
