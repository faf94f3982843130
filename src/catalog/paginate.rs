//! Fixed-size pagination over the filtered product list.
//!
//! Pages are 1-based. For a sequence of `N` items and page size `S`, page `P`
//! covers indices `[(P-1)*S, min(P*S, N))`. The [`Paginator`] keeps its current
//! page inside `[1, max(1, ceil(N/S))]`, clamping when the sequence shrinks so
//! the user is never left on an empty page.

use std::ops::Range;

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` items (`ceil(len / page_size)`).
///
/// Returns 0 for an empty sequence. A `page_size` of 0 is treated as 1.
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    len / size + if len % size == 0 { 0 } else { 1 }
}

/// Index range of `page` (1-based) within a sequence of `len` items.
///
/// Pages beyond the end yield an empty range at `len`.
///
/// # Examples
///
/// ```
/// use zcatalog::catalog::page_bounds;
///
/// assert_eq!(page_bounds(12, 5, 3), 10..12);
/// assert_eq!(page_bounds(12, 5, 1), 0..5);
/// ```
#[must_use]
pub fn page_bounds(len: usize, page_size: usize, page: usize) -> Range<usize> {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = page.saturating_mul(size).min(len);
    start..end
}

/// Slice of `items` shown on `page`.
#[must_use]
pub fn page_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    &items[page_bounds(items.len(), page_size, page)]
}

/// Current-page tracker with a session-fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
}

impl Paginator {
    /// Creates a paginator on page 1. A size of 0 falls back to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            current: 1,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Highest valid page for `len` items; at least 1.
    #[must_use]
    pub const fn last_page(&self, len: usize) -> usize {
        let count = page_count(len, self.page_size);
        if count == 0 {
            1
        } else {
            count
        }
    }

    /// Index range of the current page within `len` items.
    #[must_use]
    pub fn bounds(&self, len: usize) -> Range<usize> {
        page_bounds(len, self.page_size, self.current)
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Clamps the current page after the sequence changed length.
    ///
    /// Returns `true` if the page moved.
    pub fn clamp(&mut self, len: usize) -> bool {
        let clamped = self.current.clamp(1, self.last_page(len));
        let moved = clamped != self.current;
        if moved {
            tracing::debug!(from = self.current, to = clamped, len, "page clamped");
        }
        self.current = clamped;
        moved
    }

    /// Advances one page if possible. Returns `true` if the page changed.
    pub fn next_page(&mut self, len: usize) -> bool {
        if self.current < self.last_page(len) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page if possible. Returns `true` if the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twelve_has_two_items() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(page_bounds(12, 5, 3), 10..12);
        assert_eq!(page_slice(&items, 5, 3), &[10, 11]);
    }

    #[test]
    fn pages_partition_the_sequence() {
        for len in 0..23 {
            for size in 1..7 {
                let items: Vec<usize> = (0..len).collect();
                let rebuilt: Vec<usize> = (1..=page_count(len, size))
                    .flat_map(|page| page_slice(&items, size, page).iter().copied())
                    .collect();
                assert_eq!(rebuilt, items, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        assert_eq!(page_bounds(4, 5, 2), 4..4);
        assert_eq!(page_bounds(4, 5, 0), 0..0);
    }

    #[test]
    fn clamps_when_sequence_shrinks() {
        let mut paginator = Paginator::new(5);
        assert!(paginator.next_page(12));
        assert!(paginator.next_page(12));
        assert_eq!(paginator.current(), 3);

        assert!(paginator.clamp(7));
        assert_eq!(paginator.current(), 2);

        assert!(paginator.clamp(0));
        assert_eq!(paginator.current(), 1);
        assert!(!paginator.clamp(0));
    }

    #[test]
    fn navigation_stops_at_bounds() {
        let mut paginator = Paginator::new(5);
        assert!(!paginator.prev_page());
        assert!(paginator.next_page(6));
        assert!(!paginator.next_page(6));
        assert_eq!(paginator.current(), 2);
        assert!(paginator.prev_page());
        assert_eq!(paginator.current(), 1);
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        assert_eq!(Paginator::new(0).page_size(), DEFAULT_PAGE_SIZE);
    }
}
