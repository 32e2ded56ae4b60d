use copytrace_types::ScoreRecord;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Default number of rows per leaderboard page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Position of one page within an ordered set. Pages are 1-based, indices 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Index of the first row on this page
    pub start_index: usize,
    /// One past the last row on this page
    pub end_index: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: &'a [ScoreRecord],
    pub info: PageInfo,
}

pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_items: usize, page_size: NonZeroUsize) -> usize {
    page.clamp(1, total_pages(total_items, page_size))
}

pub fn page_info(total_items: usize, page_size: NonZeroUsize, page: usize) -> PageInfo {
    let total_pages = total_pages(total_items, page_size);
    let page = page.clamp(1, total_pages);
    let start_index = (page - 1) * page_size.get();
    let end_index = (start_index + page_size.get()).min(total_items);

    PageInfo {
        page,
        page_size: page_size.get(),
        total_pages,
        total_items,
        start_index,
        end_index: end_index.max(start_index),
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

pub fn paginate(ordered: &[ScoreRecord], page_size: NonZeroUsize, page: usize) -> Page<'_> {
    let info = page_info(ordered.len(), page_size, page);
    Page {
        items: &ordered[info.start_index..info.end_index],
        info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_testing::fixtures::record;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn records(n: usize) -> Vec<ScoreRecord> {
        (0..n).map(|i| record(&format!("F{}", i), 0.5)).collect()
    }

    #[test]
    fn test_250_records_make_three_pages() {
        let ordered = records(250);
        let page = paginate(&ordered, size(100), 3);

        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.info.start_index, 200);
        assert_eq!(page.info.end_index, 250);
        assert!(page.info.has_previous);
        assert!(!page.info.has_next);
        assert_eq!(page.items[0].address, "F200");
    }

    #[test]
    fn test_empty_set_has_one_empty_page() {
        let page = paginate(&[], size(100), 1);
        assert_eq!(page.info.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.info.has_previous);
        assert!(!page.info.has_next);
    }

    #[test]
    fn test_page_is_clamped() {
        let ordered = records(25);
        assert_eq!(paginate(&ordered, size(10), 0).info.page, 1);
        assert_eq!(paginate(&ordered, size(10), 99).info.page, 3);
        assert_eq!(paginate(&ordered, size(10), 99).items.len(), 5);
    }

    #[test]
    fn test_exact_multiple() {
        let ordered = records(200);
        let page = paginate(&ordered, size(100), 2);
        assert_eq!(page.info.total_pages, 2);
        assert_eq!(page.items.len(), 100);
        assert!(!page.info.has_next);
    }

    #[test]
    fn test_clamp_page_helper() {
        assert_eq!(clamp_page(5, 0, size(100)), 1);
        assert_eq!(clamp_page(2, 101, size(100)), 2);
    }
}
