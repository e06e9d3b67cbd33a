// crates/placesearch-core/src/pager.rs
use crate::config::PAGE_SIZE;
use crate::model::PlaceRecord;
use serde::{Deserialize, Serialize};

/// A page of results in the direct (cursor-less) form.
///
/// Serializes as `{ "options": [...], "hasMore": bool }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub options: Vec<PlaceRecord>,
    pub has_more: bool,
}

impl ResultPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fixed-size, 1-based page slicing.
///
/// Page `0` is read as page `1`. Pages past the end are empty and report
/// no more pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn has_more(&self, total: usize, page: usize) -> bool {
        self.page_count(total) > page.max(1)
    }

    pub fn slice<'s, T>(&self, items: &'s [T], page: usize) -> &'s [T] {
        let start = (page.max(1) - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    /// Cuts one page out of a full result set.
    pub fn paginate(&self, items: &[&PlaceRecord], page: usize) -> ResultPage {
        ResultPage {
            options: self
                .slice(items, page)
                .iter()
                .map(|&p| p.clone())
                .collect(),
            has_more: self.has_more(items.len(), page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_are_bounded_by_page_size() {
        let items: Vec<u32> = (0..25).collect();
        let pager = Pager::default();
        assert_eq!(pager.slice(&items, 1), &items[0..10]);
        assert_eq!(pager.slice(&items, 2), &items[10..20]);
        assert_eq!(pager.slice(&items, 3), &items[20..25]);
        assert!(pager.slice(&items, 4).is_empty());
    }

    #[test]
    fn has_more_uses_page_count() {
        let pager = Pager::default();
        assert_eq!(pager.page_count(25), 3);
        assert!(pager.has_more(25, 1));
        assert!(pager.has_more(25, 2));
        assert!(!pager.has_more(25, 3));
        assert!(!pager.has_more(20, 2));
        assert!(!pager.has_more(0, 1));
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let items: Vec<u32> = (0..12).collect();
        let pager = Pager::default();
        assert_eq!(pager.slice(&items, 0), pager.slice(&items, 1));
        assert_eq!(pager.has_more(12, 0), pager.has_more(12, 1));
    }

    #[test]
    fn huge_pages_do_not_overflow() {
        let items: Vec<u32> = (0..3).collect();
        let pager = Pager::default();
        assert!(pager.slice(&items, usize::MAX).is_empty());
        assert!(!pager.has_more(3, usize::MAX));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }
}
