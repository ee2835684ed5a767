//! Multi-select set used for bulk actions.

use std::collections::BTreeSet;

use roster_model::{Record, RecordId};

/// Ids currently checked in the table.
///
/// Ids are not validated against the record list. Stale ids are tolerated and
/// ignored by readers that go through [`Selection::present_in`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &BTreeSet<RecordId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Flip membership of `id`. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id.as_str()) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Union `ids` into the selection.
    pub fn select_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.ids.extend(ids);
    }

    pub fn deselect(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether every id in `visible` is selected. False for an empty page.
    pub fn covers(&self, visible: &[RecordId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id.as_str()))
    }

    /// "Select all on page" checkbox: clears the page if it is fully selected,
    /// otherwise adds every visible id.
    pub fn toggle_page(&mut self, visible: &[RecordId]) {
        if self.covers(visible) {
            for id in visible {
                self.ids.remove(id.as_str());
            }
        } else {
            self.select_many(visible.iter().cloned());
        }
    }

    /// Selected ids that still name a record in `records`.
    pub fn present_in<'a>(&'a self, records: &'a [Record]) -> Vec<&'a RecordId> {
        self.ids
            .iter()
            .filter(|id| records.iter().any(|record| &record.id == *id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<RecordId> {
        values.iter().copied().map(RecordId::from).collect()
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = Selection::new();
        let id = RecordId::from("1");
        assert!(selection.toggle(&id));
        assert!(selection.contains("1"));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_many_unions() {
        let mut selection = Selection::new();
        selection.select_many(ids(&["1", "2"]));
        selection.select_many(ids(&["2", "3"]));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_toggle_page_selects_then_clears_visible() {
        let mut selection = Selection::new();
        selection.select_many(ids(&["outside"]));
        let page = ids(&["1", "2"]);

        selection.toggle_page(&page);
        assert!(selection.covers(&page));
        assert_eq!(selection.len(), 3);

        selection.toggle_page(&page);
        assert!(!selection.contains("1"));
        assert!(selection.contains("outside"));
    }

    #[test]
    fn test_partially_selected_page_gets_completed() {
        let mut selection = Selection::new();
        selection.select_many(ids(&["1"]));
        selection.toggle_page(&ids(&["1", "2"]));
        assert!(selection.contains("1"));
        assert!(selection.contains("2"));
    }

    #[test]
    fn test_empty_page_is_never_covered() {
        assert!(!Selection::new().covers(&[]));
    }

    #[test]
    fn test_stale_ids_are_ignored_by_present_in() {
        let mut selection = Selection::new();
        selection.select_many(ids(&["1", "gone"]));
        let records = vec![Record {
            id: RecordId::from("1"),
            ..Record::default()
        }];
        let present = selection.present_in(&records);
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].as_str(), "1");
    }
}
