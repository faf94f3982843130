//! In-memory catalog store.
//!
//! The [`Catalog`] owns the ordered product list for the session. Products are
//! appended on create and replaced in place on edit; there is no delete.
//!
//! # Identifier Assignment
//!
//! New identifiers come from a monotonic counter seeded with the largest id in
//! the initial data plus one. Unlike positional assignment (`len + 1`), the
//! counter can never hand out an id that already exists.

use crate::domain::error::{CatalogError, Result};
use crate::domain::product::{Product, ProductFields, ProductId};
use std::collections::HashSet;

/// Ordered, exclusively owned collection of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: u32,
}

impl Catalog {
    /// Creates a catalog from initial records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Fixture`] if any id is zero, appears twice, or
    /// is `u32::MAX`.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.get() == 0 {
                return Err(CatalogError::Fixture(format!(
                    "product '{}' has id 0; ids must be positive",
                    product.name
                )));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::Fixture(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        let max_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or_else(|| {
            CatalogError::Fixture(format!("product id {max_id} leaves no id for new products"))
        })?;

        tracing::debug!(count = products.len(), next_id, "catalog initialized");

        Ok(Self { products, next_id })
    }

    /// Returns an empty catalog whose first id will be `1`.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The id the next created product will receive.
    #[must_use]
    pub const fn next_id(&self) -> ProductId {
        ProductId(self.next_id)
    }

    /// Appends a new product and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IdsExhausted`] once the counter reaches
    /// `u32::MAX`; the catalog is left unchanged.
    pub fn create(&mut self, fields: ProductFields) -> Result<&Product> {
        let id = ProductId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(CatalogError::IdsExhausted)?;

        tracing::debug!(product_id = %id, name = %fields.name, "creating product");
        self.products.push(Product::from_fields(id, fields));

        Ok(&self.products[self.products.len() - 1])
    }

    /// Replaces the product with `id` in place, preserving its id and position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has that id.
    pub fn update(&mut self, id: ProductId, fields: ProductFields) -> Result<&Product> {
        let position = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        tracing::debug!(product_id = %id, position, "updating product in place");
        self.products[position] = Product::from_fields(id, fields);

        Ok(&self.products[position])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            price: 1.0,
            category: "Misc".to_string(),
            stock: 0,
            description: String::new(),
        }
    }

    fn product(id: u32, name: &str) -> Product {
        Product::from_fields(ProductId(id), fields(name))
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, "a"), product(1, "b")]).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn rejects_zero_id() {
        let err = Catalog::new(vec![product(0, "a")]).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn create_appends_with_fresh_id() {
        let mut catalog = Catalog::new(vec![product(1, "a"), product(5, "b")]).unwrap();

        let created = catalog.create(fields("c")).unwrap().id;

        assert_eq!(created, ProductId(6));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[2].name, "c");
    }

    #[test]
    fn ids_never_collide_with_sparse_fixture() {
        // positional assignment would produce 3 here, which already exists
        let mut catalog = Catalog::new(vec![product(3, "a"), product(1, "b")]).unwrap();
        let created = catalog.create(fields("c")).unwrap().id;
        assert!(catalog.products()[..2].iter().all(|p| p.id != created));
    }

    #[test]
    fn rejects_max_id_in_fixture() {
        let err = Catalog::new(vec![product(u32::MAX, "last")]).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn create_stops_before_reusing_an_id() {
        let mut catalog = Catalog::new(vec![product(u32::MAX - 2, "a")]).unwrap();

        assert_eq!(catalog.create(fields("b")).unwrap().id, ProductId(u32::MAX - 1));
        let err = catalog.create(fields("c")).unwrap_err();

        assert!(matches!(err, CatalogError::IdsExhausted));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.next_id(), ProductId(u32::MAX));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut catalog =
            Catalog::new(vec![product(1, "a"), product(2, "b"), product(3, "c")]).unwrap();
        let before = catalog.clone();

        catalog.update(ProductId(2), fields("renamed")).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[1].id, ProductId(2));
        assert_eq!(catalog.products()[1].name, "renamed");
        assert_eq!(catalog.products()[0], before.products()[0]);
        assert_eq!(catalog.products()[2], before.products()[2]);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut catalog = Catalog::new(vec![product(1, "a")]).unwrap();
        let err = catalog.update(ProductId(9), fields("x")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ProductId(9))));
    }

    #[test]
    fn empty_catalog_starts_at_one() {
        let mut catalog = Catalog::empty();
        assert_eq!(catalog.create(fields("first")).unwrap().id, ProductId(1));
    }
}
