//! Initial catalog data loading.
//!
//! The catalog is seeded once at startup from a JSON array of products. A
//! default fixture is compiled into the plugin; a user fixture can be supplied
//! through the `fixture_file` configuration key.

use crate::domain::error::{CatalogError, Result};
use crate::domain::product::Product;
use std::path::Path;

/// Bundled sample catalog.
const EMBEDDED_FIXTURE: &str = include_str!("../../data/products.json");

/// Parses a JSON array of products.
///
/// # Errors
///
/// Returns [`CatalogError::Fixture`] if the JSON is malformed, a record is
/// missing a required field, has a blank name or category, or has a negative
/// price.
pub fn parse(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)
        .map_err(|e| CatalogError::Fixture(format!("failed to parse products: {e}")))?;

    if let Some(bad) = products
        .iter()
        .find(|p| p.name.trim().is_empty() || p.category.trim().is_empty())
    {
        return Err(CatalogError::Fixture(format!(
            "product #{} needs a non-blank name and category",
            bad.id
        )));
    }

    if let Some(bad) = products.iter().find(|p| !(p.price.is_finite() && p.price >= 0.0)) {
        return Err(CatalogError::Fixture(format!(
            "product #{} has invalid price {}",
            bad.id, bad.price
        )));
    }

    tracing::debug!(count = products.len(), "fixture parsed");
    Ok(products)
}

/// Loads the fixture compiled into the plugin.
///
/// # Errors
///
/// Only fails if the bundled data is corrupt.
pub fn load_embedded() -> Result<Vec<Product>> {
    parse(EMBEDDED_FIXTURE)
}

/// Loads a fixture from a JSON file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read and
/// [`CatalogError::Fixture`] if its content is invalid.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading fixture file");
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::io::Write;

    #[test]
    fn embedded_fixture_forms_valid_catalog() {
        let products = load_embedded().unwrap();
        assert!(products.len() > 5, "fixture should span several pages");

        let catalog = Catalog::new(products).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn rejects_missing_required_field() {
        let err = parse(r#"[{"id": 1, "price": 2, "category": "x"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn rejects_negative_price() {
        let err = parse(r#"[{"id": 1, "name": "a", "price": -2, "category": "x"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn rejects_blank_name_or_category() {
        let err = parse(r#"[{"id": 1, "name": "", "price": 1, "category": "  "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));

        let err = parse(r#"[{"id": 2, "name": "Tea", "price": 1, "category": " "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 9, "name": "Tea", "price": 4.5, "category": "Drinks", "stock": 3}}]"#
        )
        .unwrap();

        let products = load_from_file(file.path()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Tea");
        assert_eq!(products[0].stock, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
