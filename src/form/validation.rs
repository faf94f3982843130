//! Submit-time validation of a product draft.
//!
//! All rules run on every submit and every violation is reported, keyed by the
//! field it belongs to. A draft that passes is normalized into
//! [`ProductFields`]: text is trimmed and numeric fields are parsed.

use super::draft::{FormField, ProductDraft};
use crate::domain::product::ProductFields;
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_NUMERIC: &str = "Price must be a number";
pub const PRICE_NEGATIVE: &str = "Price cannot be negative";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const STOCK_NOT_WHOLE: &str = "Stock must be a whole number";

/// Field → message map produced by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failed fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.key())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a draft and coerces it into product fields.
///
/// # Errors
///
/// Returns every violated rule at once.
///
/// # Examples
///
/// ```
/// use zcatalog::form::{validate, FormField, ProductDraft};
///
/// let draft = ProductDraft {
///     name: String::new(),
///     price: "5".into(),
///     category: "Fruit".into(),
///     ..ProductDraft::default()
/// };
///
/// let errors = validate(&draft).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get(FormField::Name), Some("Name is required"));
/// ```
pub fn validate(draft: &ProductDraft) -> Result<ProductFields, ValidationErrors> {
    let _span = tracing::debug_span!("validate_draft").entered();
    let mut errors = ValidationErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }

    let price = match parse_price(&draft.price) {
        Ok(price) => price,
        Err(message) => {
            errors.insert(FormField::Price, message);
            0.0
        }
    };

    let category = draft.category.trim();
    if category.is_empty() {
        errors.insert(FormField::Category, CATEGORY_REQUIRED);
    }

    let stock = match parse_stock(&draft.stock) {
        Ok(stock) => stock,
        Err(message) => {
            errors.insert(FormField::Stock, message);
            0
        }
    };

    if !errors.is_empty() {
        tracing::debug!(failed = %errors, "draft rejected");
        return Err(errors);
    }

    Ok(ProductFields {
        name: name.to_string(),
        price,
        category: category.to_string(),
        stock,
        description: draft.description.clone(),
    })
}

fn parse_price(input: &str) -> Result<f64, &'static str> {
    let text = input.trim();
    if text.is_empty() {
        return Err(PRICE_REQUIRED);
    }
    let price: f64 = text.parse().map_err(|_| PRICE_NOT_NUMERIC)?;
    if !price.is_finite() {
        return Err(PRICE_NOT_NUMERIC);
    }
    if price < 0.0 {
        return Err(PRICE_NEGATIVE);
    }
    Ok(price)
}

fn parse_stock(input: &str) -> Result<u32, &'static str> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| STOCK_NOT_WHOLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, category: &str, stock: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            stock: stock.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed_and_coerced() {
        let fields = validate(&draft("  Apple ", " 10.5", "Fruit ", "7")).unwrap();
        assert_eq!(fields.name, "Apple");
        assert!((fields.price - 10.5).abs() < f64::EPSILON);
        assert_eq!(fields.category, "Fruit");
        assert_eq!(fields.stock, 7);
    }

    #[test]
    fn empty_stock_defaults_to_zero() {
        let fields = validate(&draft("Apple", "1", "Fruit", "  ")).unwrap();
        assert_eq!(fields.stock, 0);
    }

    #[test]
    fn reports_all_required_fields_at_once() {
        let errors = validate(&draft(" ", "", "\t", "")).unwrap_err();
        let failed: Vec<FormField> = errors.fields().collect();
        assert_eq!(
            failed,
            vec![FormField::Name, FormField::Price, FormField::Category]
        );
        assert_eq!(errors.get(FormField::Price), Some(PRICE_REQUIRED));
        assert_eq!(errors.get(FormField::Category), Some(CATEGORY_REQUIRED));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let errors = validate(&draft("Apple", "ten", "Fruit", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Price), Some(PRICE_NOT_NUMERIC));

        let errors = validate(&draft("Apple", "NaN", "Fruit", "")).unwrap_err();
        assert_eq!(errors.get(FormField::Price), Some(PRICE_NOT_NUMERIC));
    }

    #[test]
    fn negative_price_is_rejected() {
        let errors = validate(&draft("Apple", "-1", "Fruit", "")).unwrap_err();
        assert_eq!(errors.get(FormField::Price), Some(PRICE_NEGATIVE));
    }

    #[test]
    fn fractional_or_negative_stock_is_rejected() {
        for stock in ["2.5", "-3", "many"] {
            let errors = validate(&draft("Apple", "1", "Fruit", stock)).unwrap_err();
            assert_eq!(errors.get(FormField::Stock), Some(STOCK_NOT_WHOLE), "stock={stock}");
        }
    }

    #[test]
    fn description_is_kept_verbatim() {
        let mut d = draft("Apple", "1", "Fruit", "");
        d.description = "  crisp  ".to_string();
        assert_eq!(validate(&d).unwrap().description, "  crisp  ");
    }

    #[test]
    fn display_lists_fields_in_form_order() {
        let errors = validate(&draft("", "", "Fruit", "")).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "name: Name is required; price: Price is required"
        );
    }
}
