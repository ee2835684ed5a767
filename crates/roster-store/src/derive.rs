//! Derived view pipeline: search, gender filter, sort, paginate.
//!
//! Every stage is a pure function over borrowed records. The table never owns
//! a copy of the data; it renders whatever [`derive_view`] returns for the
//! current record list and [`ViewState`].

use roster_model::{GenderFilter, Record, RecordId, SortSpec};

use crate::view_state::ViewState;

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Records on the effective page, in display order.
    pub page_items: Vec<&'a Record>,
    /// At least 1, even when nothing matches.
    pub total_pages: usize,
    /// `min(requested_page, total_pages)`.
    pub effective_page: usize,
    /// Records left after search and gender filtering.
    pub filtered_len: usize,
    pub requested_page: usize,
    pub page_size: usize,
}

impl DerivedView<'_> {
    /// Whether the stored page should be reset to 1.
    pub fn needs_page_reset(&self) -> bool {
        self.requested_page > self.total_pages
            || (self.filtered_len > 0 && self.page_items.is_empty())
    }

    /// Ids on this page, for "select all visible".
    pub fn page_ids(&self) -> Vec<RecordId> {
        self.page_items.iter().map(|record| record.id.clone()).collect()
    }

    /// 1-based inclusive range of the rows shown, `None` for an empty page.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.page_items.is_empty() {
            return None;
        }
        let first = (self.effective_page - 1) * self.page_size + 1;
        Some((first, first + self.page_items.len() - 1))
    }
}

/// Keep records whose first name, last name, email, or gender contains the
/// search text, case-insensitively. Blank search keeps everything.
pub fn filter_by_search<'a, I>(records: I, search: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if search.trim().is_empty() {
        return records.into_iter().collect();
    }
    let needle = search.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            [
                &record.first_name,
                &record.last_name,
                &record.email,
                &record.gender,
            ]
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn filter_by_gender<'a>(records: Vec<&'a Record>, filter: &GenderFilter) -> Vec<&'a Record> {
    if filter.is_all() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| filter.matches(&record.gender))
        .collect()
}

/// Stable sort by the chosen field. Ties keep their relative order in both
/// directions. No key leaves the order untouched.
pub fn sort_records(records: &mut [&Record], sort: SortSpec) {
    let Some(key) = sort.key else {
        return;
    };
    records.sort_by(|a, b| sort.direction.orient(a.field(key).cmp(b.field(key))));
}

/// Filter and sort without paginating.
pub fn filtered_sorted<'a>(records: &'a [Record], view: &ViewState) -> Vec<&'a Record> {
    let searched = filter_by_search(records, view.search());
    let mut filtered = filter_by_gender(searched, view.gender_filter());
    sort_records(&mut filtered, view.sort());
    filtered
}

/// Slice `items` to the requested page, clamping past-the-end pages.
pub fn paginate<'a>(items: Vec<&'a Record>, requested_page: usize, page_size: usize) -> DerivedView<'a> {
    let page_size = page_size.max(1);
    let filtered_len = items.len();
    let total_pages = filtered_len.div_ceil(page_size).max(1);
    let requested_page = requested_page.max(1);
    let effective_page = requested_page.min(total_pages);

    let start = (effective_page - 1) * page_size;
    let page_items = items.into_iter().skip(start).take(page_size).collect();

    DerivedView {
        page_items,
        total_pages,
        effective_page,
        filtered_len,
        requested_page,
        page_size,
    }
}

/// Run the whole pipeline for one render.
pub fn derive_view<'a>(records: &'a [Record], view: &ViewState) -> DerivedView<'a> {
    let filtered = filtered_sorted(records, view);
    paginate(filtered, view.current_page(), view.page_size().get())
}
