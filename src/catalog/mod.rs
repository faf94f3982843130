//! Catalog data layer: store, search, pagination, and fixture loading.
//!
//! Everything here is pure state and functions; none of it talks to Zellij.
//! The application layer composes these pieces into the product page.
//!
//! - [`store`]: Owned product list with id assignment and in-place edits
//! - [`search`]: Case-insensitive name filter with debounced application
//! - [`debounce`]: Cancelable timer handle used by the search filter
//! - [`paginate`]: Fixed-size page slicing and current-page tracking
//! - [`fixture`]: JSON fixture loading (embedded or from file)

pub mod debounce;
pub mod fixture;
pub mod paginate;
pub mod search;
pub mod store;

pub use debounce::{DebounceHandle, Debouncer, DEFAULT_DEBOUNCE};
pub use paginate::{page_bounds, page_count, page_slice, Paginator, DEFAULT_PAGE_SIZE};
pub use search::{filter_by_name, match_range, SearchFilter};
pub use store::Catalog;
