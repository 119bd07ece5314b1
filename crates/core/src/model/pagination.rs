use std::ops::Range;

/// Questions shown per page.
pub const PAGE_SIZE: usize = 5;

/// Fixed-size paging over a question sequence.
///
/// Pages are 1-based. Question numbering is global, so question index `i`
/// always lives on the same page regardless of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    question_count: usize,
    page_size: usize,
}

impl Pagination {
    /// `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(question_count: usize, page_size: usize) -> Self {
        Self {
            question_count,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(question_count / page_size)`, never less than one.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.question_count.div_ceil(self.page_size).max(1)
    }

    /// Page holding the 0-based question `index`.
    #[must_use]
    pub fn page_of_index(&self, index: usize) -> usize {
        index / self.page_size + 1
    }

    /// Page holding 1-based question `number` (`ceil(number / page_size)`).
    #[must_use]
    pub fn page_of_number(&self, number: usize) -> usize {
        number.max(1).div_ceil(self.page_size)
    }

    /// Clamp `page` into `[1, total_pages]`.
    #[must_use]
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    /// 0-based question indices on `page` (clamped).
    #[must_use]
    pub fn page_range(&self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.question_count);
        start.min(end)..end
    }

    #[must_use]
    pub fn is_last_page(&self, page: usize) -> bool {
        page >= self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_questions_make_ten_pages() {
        let p = Pagination::new(50, PAGE_SIZE);
        assert_eq!(p.total_pages(), 10);
        assert_eq!(p.page_of_number(23), 5);
        assert_eq!(p.page_of_index(22), 5);
        assert_eq!(p.page_range(5), 20..25);
    }

    #[test]
    fn partial_last_page() {
        let p = Pagination::new(12, PAGE_SIZE);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.page_range(3), 10..12);
        assert!(p.is_last_page(3));
        assert!(!p.is_last_page(2));
    }

    #[test]
    fn clamps_out_of_range_pages() {
        let p = Pagination::new(15, PAGE_SIZE);
        assert_eq!(p.clamp(0), 1);
        assert_eq!(p.clamp(99), 3);
        assert_eq!(p.page_range(99), 10..15);
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let p = Pagination::new(0, PAGE_SIZE);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.page_range(1), 0..0);
    }
}
