//! Incrementally growing visible window over a derived list.

use crate::settings::DEFAULT_PAGE_SIZE;

/// Prefix of `list` shown after `pages_shown` pages of `page_size` items.
pub fn visible_window<T>(
    list: &[T],
    page_size: usize,
    pages_shown: usize,
) -> &[T] {
    let len = page_size.saturating_mul(pages_shown).min(list.len());
    &list[..len]
}

/// Whether "load more" would reveal anything.
pub fn has_more(len: usize, page_size: usize, pages_shown: usize) -> bool {
    page_size.saturating_mul(pages_shown) < len
}

/// Pagination state owned by the view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    pages_shown: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A zero page size is bumped to one so the window can always grow.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages_shown: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pages_shown(&self) -> usize {
        self.pages_shown
    }

    pub fn window<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        visible_window(list, self.page_size, self.pages_shown)
    }

    pub fn has_more(&self, len: usize) -> bool {
        has_more(len, self.page_size, self.pages_shown)
    }

    /// Reveal one more page of a list of `len` items.
    ///
    /// Returns `false` and leaves the state untouched once the whole list is
    /// visible.
    pub fn load_more(&mut self, len: usize) -> bool {
        if !self.has_more(len) {
            return false;
        }
        self.pages_shown += 1;
        true
    }

    /// Back to the first page; required after any filter or search change.
    pub fn reset(&mut self) {
        self.pages_shown = 1;
    }
}
