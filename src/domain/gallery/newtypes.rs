// SPDX-License-Identifier: MPL-2.0
//! Pagination value objects.

/// Number of photos requested per page.
pub const PAGE_SIZE: u32 = 12;

/// 1-based page index, never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number, raising 0 to 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Previous page, floor-clamped at the first page.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Next page, ceiling-clamped at `total_pages`.
    ///
    /// A page already past the last one stays where it is.
    #[must_use]
    pub fn next(self, total_pages: u32) -> Self {
        if self.0 >= total_pages {
            self
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}
