use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn first_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Server-reported paging window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            pages: 0,
        }
    }

    /// Number of pages, derived from `total` and `limit` when the total is known.
    pub fn page_count(&self) -> u32 {
        if self.limit == 0 || self.total == 0 {
            return self.pages;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Clamp a requested page into `1..=page_count`.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.page_count().max(1))
    }

    /// 1-based index of the first row on the current page (0 when empty).
    pub fn first_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit) + 1
    }

    pub fn last_item(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.limit)).min(self.total)
    }

    /// Fill in `pages` from the other fields.
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.pages = self.page_count();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn twenty_three_rows_make_three_pages() {
        let p: Pagination = serde_json::from_value(json!({ "page": 1, "limit": 10, "total": 23 })).unwrap();
        assert_eq!(p.page_count(), 3);
        assert!(p.has_next());
        assert!(!p.has_prev());

        let last = Pagination { page: 3, ..p };
        assert!(!last.has_next());
        assert!(last.has_prev());
        assert_eq!(last.first_item(), 21);
        assert_eq!(last.last_item(), 23);
    }

    #[test]
    fn falls_back_to_reported_pages_without_total() {
        let p = Pagination {
            page: 2,
            limit: 10,
            total: 0,
            pages: 5,
        };
        assert_eq!(p.page_count(), 5);
        assert_eq!(p.clamp_page(9), 5);
        assert_eq!(p.clamp_page(0), 1);
    }

    #[test]
    fn empty_listing_has_no_neighbours() {
        let p = Pagination::new(10);
        assert_eq!(p.page_count(), 0);
        assert!(!p.has_next());
        assert!(!p.has_prev());
        assert_eq!(p.first_item(), 0);
        assert_eq!(p.clamp_page(4), 1);
    }
}
