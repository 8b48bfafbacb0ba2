#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Client-held pagination cursor: 1-indexed page, fixed size, server total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl Pager {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { page: 1, size: size.max(1), total: 0 }
    }

    /// `ceil(total / size)`; zero when the list is empty.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.size.max(1)))
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Page number for the "prev" control, if enabled.
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Page number for the "next" control, if enabled.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Record a loaded page. Page numbers below 1 clamp to 1.
    pub fn loaded(&mut self, page: u32, total: u64) {
        self.page = page.max(1);
        self.total = total;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
