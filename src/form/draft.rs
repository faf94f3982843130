//! Product form state: draft, focused field, mode, and errors.
//!
//! A [`ProductForm`] exists only while the add/edit form is open. Its
//! [`ProductDraft`] is an independent text copy of the record, so nothing the
//! user types is visible in the catalog until a successful submit.

use super::validation::{validate, ValidationErrors};
use crate::domain::product::{Product, ProductFields, ProductId};

/// Editable fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Price,
    Category,
    Stock,
    Description,
}

impl FormField {
    /// All fields in the order they are shown and traversed.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Price,
        Self::Category,
        Self::Stock,
        Self::Description,
    ];

    /// Machine name, matching the product's JSON key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Category => "category",
            Self::Stock => "stock",
            Self::Description => "description",
        }
    }

    /// Human label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Price => "Price",
            Self::Category => "Category",
            Self::Stock => "Stock",
            Self::Description => "Description",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Price | Self::Category)
    }

    /// Next field, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Category,
            Self::Category => Self::Stock,
            Self::Stock => Self::Description,
            Self::Description => Self::Name,
        }
    }

    /// Previous field, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Price => Self::Name,
            Self::Category => Self::Price,
            Self::Stock => Self::Category,
            Self::Description => Self::Stock,
        }
    }
}

/// Text working copy of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductDraft {
    /// Pre-populates a draft from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::Stock => &self.stock,
            FormField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Category => &mut self.category,
            FormField::Stock => &mut self.stock,
            FormField::Description => &mut self.description,
        }
    }
}

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// Open add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    mode: FormMode,
    draft: ProductDraft,
    focus: FormField,
    errors: ValidationErrors,
}

impl ProductForm {
    /// Opens an empty form for a new product.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProductDraft::default(),
            focus: FormField::Name,
            errors: ValidationErrors::new(),
        }
    }

    /// Opens a form pre-populated from `product`.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            draft: ProductDraft::from_product(product),
            focus: FormField::Name,
            errors: ValidationErrors::new(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub const fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// "Add Product" or "Edit Product".
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    /// "Add" or "Update".
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add",
            FormMode::Edit(_) => "Update",
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        self.draft.field_mut(self.focus).push(c);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.draft.field_mut(self.focus).pop();
    }

    /// Validates the draft.
    ///
    /// On failure the errors are stored for display, focus jumps to the first
    /// failing field, and the draft is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the same errors that were stored on the form.
    pub fn submit(&mut self) -> Result<ProductFields, ValidationErrors> {
        match validate(&self.draft) {
            Ok(fields) => {
                self.errors.clear();
                Ok(fields)
            }
            Err(errors) => {
                if let Some(first) = errors.fields().next() {
                    self.focus = first;
                }
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
