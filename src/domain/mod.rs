//! Domain layer for the catalog plugin.
//!
//! Core types independent of Zellij APIs and rendering.
//!
//! - [`error`]: Error type and result alias
//! - [`product`]: Product record, identifier, and validated field set

pub mod error;
pub mod product;

pub use error::{CatalogError, Result};
pub use product::{Product, ProductFields, ProductId, CURRENCY_SYMBOL};
