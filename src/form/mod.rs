//! Add/edit product form.
//!
//! - [`draft`]: Form state (draft text, focus, create/edit mode)
//! - [`validation`]: Submit-time rules producing per-field messages

pub mod draft;
pub mod validation;

pub use draft::{FormField, FormMode, ProductDraft, ProductForm};
pub use validation::{validate, ValidationErrors};
