//! Page parameters for the customer and product list operations.
//!
//! Callers hand in raw page numbers; `normalize` clamps them to sane bounds
//! before the repository turns them into a query.

/// Pagination input as received from a caller.
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// rows per page, capped at 100
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane bounds and return `(zero_based_page, per_page)` as `u64`.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }

    /// Zero-based row offset of the normalized page.
    pub fn offset(self) -> u64 {
        let (page_idx, per_page) = self.normalize();
        page_idx * per_page
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}
