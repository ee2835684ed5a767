//! Transient table state: search, filter, sort, paging, and selection.

use roster_model::{GenderFilter, PageSize, SortKey, SortSpec};

use crate::selection::Selection;

/// Everything about how the table is currently looked at.
///
/// Only `page_size` outlives a session; the rest resets on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search: String,
    gender_filter: GenderFilter,
    sort: SortSpec,
    current_page: usize,
    page_size: PageSize,
    selection: Selection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            gender_filter: GenderFilter::All,
            sort: SortSpec::default(),
            current_page: 1,
            page_size: PageSize::default(),
            selection: Selection::default(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn gender_filter(&self) -> &GenderFilter {
        &self.gender_filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// 1-based requested page. May exceed the page count until the next
    /// render corrects it.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Set the search text and go back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    /// Set the gender filter and go back to page 1.
    pub fn set_gender_filter(&mut self, filter: GenderFilter) {
        self.gender_filter = filter;
        self.current_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Header click on `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Set rows per page and go back to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }
}
