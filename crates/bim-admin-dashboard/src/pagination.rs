//! Page-number pagination over server collections

/// Current page and page count of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
    count: u64,
}

impl Pager {
    /// Start at page 1
    pub const fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: if page_size == 0 { 1 } else { page_size },
            count: 0,
        }
    }

    /// Current 1-based page
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total records reported by the server
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// `max(1, ceil(count / page_size))`
    pub const fn total_pages(&self) -> u32 {
        let pages = self.count.div_ceil(self.page_size as u64);
        if pages == 0 {
            1
        } else if pages > u32::MAX as u64 {
            u32::MAX
        } else {
            pages as u32
        }
    }

    /// Record a new total; the current page is clamped into range
    pub const fn set_count(&mut self, count: u64) {
        self.count = count;
        if self.page > self.total_pages() {
            self.page = self.total_pages();
        }
    }

    /// Back to page 1, as after a search or filter change
    pub const fn reset(&mut self) {
        self.page = 1;
    }

    /// Jump to `page`, clamped to `[1, total_pages]`; returns whether it moved
    pub const fn go_to(&mut self, page: u32) -> bool {
        let target = if page < 1 {
            1
        } else if page > self.total_pages() {
            self.total_pages()
        } else {
            page
        };
        let moved = target != self.page;
        self.page = target;
        moved
    }

    /// Advance one page; returns whether it moved
    pub const fn next(&mut self) -> bool {
        self.go_to(self.page.saturating_add(1))
    }

    /// Go back one page; returns whether it moved
    pub const fn prev(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    /// Whether a later page exists
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether an earlier page exists
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based range of records on the current page, for "Showing x to y of n"
    pub fn showing(&self) -> (u64, u64) {
        if self.count == 0 {
            return (0, 0);
        }
        let start = u64::from(self.page - 1) * u64::from(self.page_size) + 1;
        let end = (start + u64::from(self.page_size) - 1).min(self.count);
        (start, end)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 20, 1)]
    #[case(1, 20, 1)]
    #[case(20, 20, 1)]
    #[case(21, 20, 2)]
    #[case(45, 10, 5)]
    fn test_total_pages(#[case] count: u64, #[case] size: u32, #[case] expected: u32) {
        let mut pager = Pager::new(size);
        pager.set_count(count);
        assert_eq!(pager.total_pages(), expected);
    }

    #[test]
    fn test_prev_next_are_clamped() {
        let mut pager = Pager::new(20);
        pager.set_count(45);

        assert!(!pager.prev());
        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next());
        assert_eq!(pager.page(), 3);
        assert!(!pager.has_next());
        assert_eq!(pager.showing(), (41, 45));
    }

    #[test]
    fn test_shrinking_count_pulls_page_back() {
        let mut pager = Pager::new(10);
        pager.set_count(100);
        pager.go_to(9);
        pager.set_count(15);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut pager = Pager::new(10);
        pager.set_count(100);
        pager.go_to(4);
        pager.reset();
        assert_eq!(pager.page(), 1);
        assert!(!pager.has_prev());
    }

    proptest! {
        #[test]
        fn prop_page_stays_in_range(count in 0u64..10_000, size in 1u32..100, jumps in proptest::collection::vec(0u32..500, 0..20)) {
            let mut pager = Pager::new(size);
            pager.set_count(count);
            for jump in jumps {
                pager.go_to(jump);
                prop_assert!(pager.page() >= 1);
                prop_assert!(pager.page() <= pager.total_pages());
            }
        }

        #[test]
        fn prop_total_pages_covers_count(count in 0u64..100_000, size in 1u32..500) {
            let mut pager = Pager::new(size);
            pager.set_count(count);
            let capacity = u64::from(pager.total_pages()) * u64::from(size);
            prop_assert!(capacity >= count);
            prop_assert!(pager.total_pages() == 1 || capacity - count < u64::from(size));
        }
    }
}
