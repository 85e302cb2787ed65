use crate::domain::market::{AssetClass, AssetRow, MarketOverview};

pub const PAGE_SIZE_CHOICES: [usize; 3] = [10, 25, 50];

/// View parameters of the dashboard's asset table: tab, symbol filter and paging.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetTableView {
    pub tab: AssetClass,
    pub filter: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for AssetTableView {
    fn default() -> Self {
        Self::new(PAGE_SIZE_CHOICES[0])
    }
}

impl AssetTableView {
    pub fn new(page_size: usize) -> Self {
        Self { tab: AssetClass::Stocks, filter: String::new(), page: 1, page_size: page_size.max(1) }
    }

    /// Switching tabs starts from the first page
    pub fn set_tab(&mut self, tab: AssetClass) {
        if self.tab != tab {
            self.tab = tab;
            self.page = 1;
        }
    }

    /// Any change of the symbol filter starts from the first page
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Advances unless the current page is already the last one
    pub fn next_page(&mut self, filtered_len: usize) {
        if self.page < page_count(filtered_len, self.page_size) {
            self.page += 1;
        }
    }

    pub fn has_next(&self, filtered_len: usize) -> bool {
        self.page < page_count(filtered_len, self.page_size)
    }

    /// Rows of the active tab whose symbol matches the filter
    pub fn filtered_rows(&self, overview: &MarketOverview) -> Vec<AssetRow> {
        overview
            .rows(self.tab)
            .into_iter()
            .filter(|row| row.symbol.matches(&self.filter))
            .collect()
    }

    /// The visible page of the filtered rows
    pub fn visible_rows(&self, overview: &MarketOverview) -> Vec<AssetRow> {
        paginate(&self.filtered_rows(overview), self.page, self.page_size).to_vec()
    }
}

/// `page_size` items starting at `(page - 1) * page_size`, clamped to the slice.
/// Page 0 reads as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages, at least one so an empty table still shows "Page 1"
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_clamps() {
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &items[20..23]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
    }

    #[test]
    fn page_navigation_bounds() {
        let mut view = AssetTableView::new(10);
        view.prev_page();
        assert_eq!(view.page, 1);
        view.next_page(15);
        assert_eq!(view.page, 2);
        view.next_page(15);
        assert_eq!(view.page, 2);
        assert!(!view.has_next(15));
    }

    #[test]
    fn filter_and_tab_reset_page() {
        let mut view = AssetTableView::new(10);
        view.page = 3;
        view.set_filter("a");
        assert_eq!(view.page, 1);
        view.page = 2;
        view.set_tab(AssetClass::Crypto);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn page_count_never_zero() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }
}
