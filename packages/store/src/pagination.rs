//! Page window arithmetic for the users table.

use std::ops::Range;

/// Number of pages needed to show `len` rows at `size` rows per page.
pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}

/// Index range of page `index`, clipped to `len`. Empty when out of range.
pub fn page_range(len: usize, index: usize, size: usize) -> Range<usize> {
    let start = index.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// Where the pager is and which buttons it can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub index: usize,
    pub size: usize,
    pub total: usize,
}

impl Pager {
    pub fn new(index: usize, size: usize, total: usize) -> Self {
        Self { index, size, total }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.size)
    }

    pub fn first(&self) -> usize {
        0
    }

    pub fn is_first(&self) -> bool {
        self.index == self.first()
    }

    pub fn last(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Previous page, `None` on the first page.
    pub fn prev(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Next page, `None` on or past the last page.
    pub fn next(&self) -> Option<usize> {
        self.index
            .checked_add(1)
            .filter(|&next| next < self.page_count())
    }

    /// Zero-based indices of every page, for the numbered buttons.
    pub fn pages(&self) -> Range<usize> {
        0..self.page_count()
    }

    /// Footer label such as `"11–20 of 46"`.
    pub fn summary(&self) -> String {
        let range = page_range(self.total, self.index, self.size);
        if range.is_empty() {
            return format!("0–0 of {}", self.total);
        }
        format!("{}–{} of {}", range.start + 1, range.end, self.total)
    }
}
