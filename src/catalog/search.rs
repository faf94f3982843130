//! Name search with debounced application.
//!
//! [`filter_by_name`] is the pure filtering contract: a case-insensitive
//! substring match on the product name. [`SearchFilter`] tracks what the user
//! has typed separately from the query that is actually applied, and promotes
//! the input to the applied query only when its [`Debouncer`] fires.

use super::debounce::Debouncer;
use crate::domain::product::Product;
use std::time::Duration;

/// Returns the products whose name contains `query`, ignoring case.
///
/// An empty query returns every product in catalog order. The query is not
/// trimmed.
///
/// # Examples
///
/// ```
/// use zcatalog::catalog::filter_by_name;
/// use zcatalog::domain::{Product, ProductFields, ProductId};
///
/// let apple = Product::from_fields(ProductId(1), ProductFields {
///     name: "Apple".into(),
///     price: 10.0,
///     category: "Fruit".into(),
///     stock: 5,
///     description: String::new(),
/// });
/// let catalog = vec![apple];
///
/// assert_eq!(filter_by_name(&catalog, "app").len(), 1);
/// assert!(filter_by_name(&catalog, "xyz").is_empty());
/// ```
#[must_use]
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let _span = tracing::debug_span!(
        "filter_by_name",
        total = products.len(),
        query_len = query.len()
    )
    .entered();

    if query.is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect();

    tracing::debug!(matched = matched.len(), "name filter applied");
    matched
}

/// Locates the first case-insensitive occurrence of `query` in `text`.
///
/// Returns a `(start, end)` range in character indices for highlighting, or
/// `None` when the query is empty or absent.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
        })
        .map(|start| (start, start + needle.len()))
}

/// Search input plus the debounced, applied query.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    input: String,
    applied: String,
    debouncer: Debouncer,
}

impl SearchFilter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            input: String::new(),
            applied: String::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    /// The text currently in the search box.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The query the filtered view was last computed with.
    #[must_use]
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Whether typed input is waiting for the debounce interval to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Appends a character and re-arms the debounce timer.
    ///
    /// Returns the delay the host timer must be started with.
    pub fn push_char(&mut self, c: char) -> Duration {
        self.input.push(c);
        self.rearm()
    }

    /// Removes the last character.
    ///
    /// Returns the timer delay to start, or `None` if the input was already empty.
    pub fn backspace(&mut self) -> Option<Duration> {
        self.input.pop().map(|_| self.rearm())
    }

    /// Handles one host timer expiry.
    ///
    /// Returns `true` when the pending input became the applied query and
    /// differs from the previous one, meaning the filtered view must be
    /// recomputed.
    pub fn on_timer(&mut self) -> bool {
        if !self.debouncer.on_expiry() {
            return false;
        }
        self.promote()
    }

    /// Clears the input and applies the empty query immediately.
    ///
    /// Any pending timer is canceled. Returns `true` if the applied query changed.
    pub fn clear(&mut self) -> bool {
        self.debouncer.cancel();
        self.input.clear();
        self.promote()
    }

    /// Applies the current input now, canceling any pending timer.
    ///
    /// Returns `true` if the applied query changed.
    pub fn commit(&mut self) -> bool {
        self.debouncer.cancel();
        self.promote()
    }

    fn rearm(&mut self) -> Duration {
        self.debouncer.schedule();
        tracing::trace!(input = %self.input, "search input changed");
        self.debouncer.delay()
    }

    fn promote(&mut self) -> bool {
        if self.applied == self.input {
            return false;
        }
        self.applied.clone_from(&self.input);
        tracing::debug!(query = %self.applied, "search query applied");
        true
    }
}
