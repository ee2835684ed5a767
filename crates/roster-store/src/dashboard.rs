//! Dashboard controller.
//!
//! [`Dashboard`] is the single owner of the record store and the view state.
//! It keeps the selection consistent with deletions, writes the persisted
//! subset through a [`PersistHook`] after each relevant mutation, and applies
//! the page correction the derived view asks for.

use std::collections::BTreeSet;

use roster_model::{
    FieldErrors, GenderFilter, PageSize, Record, RecordDraft, RecordId, RecordPatch, SortKey,
    SortSpec,
};
use roster_persistence::{KeyValueStore, PersistedState, Preferences, StatePersister};

use crate::derive::{DerivedView, derive_view};
use crate::records::RecordStore;
use crate::stats::DashboardStats;
use crate::view_state::ViewState;

/// Receives the persisted subset after every record or page-size change.
pub trait PersistHook {
    fn persist(&mut self, state: &PersistedState);
}

/// No persistence.
impl PersistHook for () {
    fn persist(&mut self, _state: &PersistedState) {}
}

impl<S: KeyValueStore> PersistHook for StatePersister<S> {
    fn persist(&mut self, state: &PersistedState) {
        if let Err(e) = self.save(state) {
            let suggestion = e.suggestion().unwrap_or_default();
            tracing::warn!(
                key = self.key(),
                error = %e,
                %suggestion,
                "failed to persist dashboard state"
            );
        }
    }
}

/// What the initial fetch produced, as seen by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Loaded(Vec<Record>),
    /// Fetch failed; the message is shown next to the retry action.
    Failed(String),
    /// The owner went away before the fetch resolved.
    Cancelled,
}

/// Progress of the initial load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready,
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Dashboard<H = ()> {
    records: RecordStore,
    view: ViewState,
    status: LoadStatus,
    hook: H,
}

impl Default for Dashboard<()> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<H: PersistHook> Dashboard<H> {
    pub fn new(hook: H) -> Self {
        Self {
            records: RecordStore::new(),
            view: ViewState::new(),
            status: LoadStatus::Idle,
            hook,
        }
    }

    /// Build a dashboard from restored state without writing it back.
    pub fn with_state(state: PersistedState, hook: H) -> Self {
        let mut dashboard = Self::new(hook);
        dashboard.hydrate(state);
        dashboard
    }

    /// Adopt restored records and preferences. Does not persist.
    pub fn hydrate(&mut self, state: PersistedState) {
        tracing::debug!(
            records = state.records.len(),
            page_size = state.preferences.page_size.get(),
            "hydrating dashboard"
        );
        self.records.set_all(state.records);
        self.view.set_page_size(state.preferences.page_size);
    }

    /// The persisted subset of the current state.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            records: self.records.records().to_vec(),
            preferences: Preferences {
                page_size: self.view.page_size(),
            },
        }
    }

    fn persist(&mut self) {
        let state = self.snapshot();
        self.hook.persist(&state);
    }

    pub fn records(&self) -> &[Record] {
        self.records.records()
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn into_hook(self) -> H {
        self.hook
    }

    // ---- initial load ----

    /// Whether the initial fetch should run: only when nothing was restored.
    pub fn needs_initial_load(&self) -> bool {
        self.records.is_empty()
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Apply the result of the initial fetch.
    ///
    /// Loaded records replace the store only if it is still empty, so edits
    /// made while the fetch was in flight win. A cancelled load changes
    /// nothing. Returns whether records were applied.
    pub fn finish_load(&mut self, result: LoadResult) -> bool {
        match result {
            LoadResult::Cancelled => false,
            LoadResult::Failed(message) => {
                self.status = LoadStatus::Failed(message);
                false
            }
            LoadResult::Loaded(records) => {
                self.status = LoadStatus::Ready;
                if !self.records.is_empty() {
                    tracing::info!(
                        existing = self.records.len(),
                        "store already populated, keeping existing records"
                    );
                    return false;
                }
                tracing::info!(records = records.len(), "applied initial records");
                self.records.set_all(records);
                self.persist();
                true
            }
        }
    }

    // ---- record mutations ----

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(id = %record.id, "adding record");
        self.records.add(record);
        self.persist();
    }

    /// Validate a form submission and add it under a fresh id.
    pub fn create_record(&mut self, draft: RecordDraft) -> Result<RecordId, FieldErrors> {
        draft.validate()?;
        let record = draft.into_record();
        let id = record.id.clone();
        self.add_record(record);
        Ok(id)
    }

    /// Merge `patch` into the record. Unknown ids are a silent no-op.
    pub fn update_record(&mut self, id: &str, patch: &RecordPatch) -> bool {
        if !self.records.update(id, patch) {
            tracing::debug!(id, "update for unknown record ignored");
            return false;
        }
        tracing::debug!(id, fields = ?patch.touched_fields(), "updated record");
        self.persist();
        true
    }

    /// Validate an edit form and apply it to `id`.
    pub fn edit_record(&mut self, id: &str, draft: RecordDraft) -> Result<bool, FieldErrors> {
        draft.validate()?;
        Ok(self.update_record(id, &draft.into_patch()))
    }

    /// Remove the record and drop it from the selection.
    pub fn delete_record(&mut self, id: &str) -> bool {
        let removed = self.records.remove(id);
        self.view.selection_mut().deselect(id);
        if removed {
            tracing::debug!(id, "deleted record");
            self.persist();
        }
        removed
    }

    /// Remove every record in `ids`, then clear the whole selection.
    pub fn delete_many(&mut self, ids: &BTreeSet<RecordId>) -> usize {
        let removed = self.records.remove_many(ids);
        self.view.selection_mut().clear();
        tracing::debug!(requested = ids.len(), removed, "bulk delete");
        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn delete_selected(&mut self) -> usize {
        let ids = self.view.selection().ids().clone();
        self.delete_many(&ids)
    }

    // ---- view mutations ----

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    pub fn set_gender_filter(&mut self, filter: GenderFilter) {
        self.view.set_gender_filter(filter);
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.view.set_sort(sort);
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.set_page_size(page_size);
        self.persist();
    }

    // ---- selection ----

    pub fn toggle_selected(&mut self, id: &RecordId) -> bool {
        self.view.selection_mut().toggle(id)
    }

    pub fn select_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.view.selection_mut().select_many(ids);
    }

    /// "Select all visible" checkbox for the current page.
    pub fn toggle_page_selection(&mut self) {
        let visible = self.view().page_ids();
        self.view.selection_mut().toggle_page(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.view.selection_mut().clear();
    }

    /// Selected records that still exist, in store order.
    pub fn selected_records(&self) -> Vec<&Record> {
        let selection = self.view.selection();
        self.records
            .records()
            .iter()
            .filter(|record| selection.contains(record.id.as_str()))
            .collect()
    }

    // ---- derived ----

    /// Current page of the table. Pure; see [`Dashboard::render`].
    pub fn view(&self) -> DerivedView<'_> {
        derive_view(self.records.records(), &self.view)
    }

    /// Reset the stored page to 1 if the view reports it is out of range.
    /// Returns whether it was reset.
    pub fn correct_page(&mut self) -> bool {
        if !self.view().needs_page_reset() {
            return false;
        }
        tracing::debug!(
            requested = self.view.current_page(),
            "page out of range, resetting to 1"
        );
        self.view.set_page(1);
        true
    }

    /// Current page of the table after [`Dashboard::correct_page`].
    pub fn render(&mut self) -> DerivedView<'_> {
        self.correct_page();
        self.view()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_records(self.records.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_persistence::MemoryStore;

    #[derive(Debug, Default)]
    struct Recorder(Vec<PersistedState>);

    impl PersistHook for Recorder {
        fn persist(&mut self, state: &PersistedState) {
            self.0.push(state.clone());
        }
    }

    fn record(id: &str, first_name: &str, gender: &str) -> Record {
        Record {
            id: RecordId::new(id),
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{id}@example.com"),
            gender: gender.to_string(),
            ip_address: format!("10.0.0.{id}"),
        }
    }

    fn seeded(count: usize) -> Dashboard<Recorder> {
        let records = (1..=count)
            .map(|n| record(&n.to_string(), &format!("User{n}"), "Male"))
            .collect();
        Dashboard::with_state(
            PersistedState {
                records,
                preferences: Preferences::default(),
            },
            Recorder::default(),
        )
    }

    #[test]
    fn test_hydrate_does_not_persist() {
        let dashboard = seeded(3);
        assert_eq!(dashboard.records().len(), 3);
        assert!(dashboard.hook().0.is_empty());
        assert!(!dashboard.needs_initial_load());
    }

    #[test]
    fn test_initial_load_applies_to_empty_store() {
        let mut dashboard = Dashboard::new(Recorder::default());
        assert!(dashboard.needs_initial_load());
        dashboard.begin_load();
        assert!(dashboard.status().is_loading());

        let applied = dashboard.finish_load(LoadResult::Loaded(vec![record("1", "Ann", "Female")]));
        assert!(applied);
        assert_eq!(dashboard.status(), &LoadStatus::Ready);
        assert_eq!(dashboard.hook().0.len(), 1);
        assert_eq!(dashboard.hook().0[0].records.len(), 1);
    }

    #[test]
    fn test_late_load_does_not_clobber_edits() {
        let mut dashboard = Dashboard::new(Recorder::default());
        dashboard.begin_load();
        dashboard.add_record(record("mine", "Me", "Female"));

        let applied = dashboard.finish_load(LoadResult::Loaded(vec![record("1", "Ann", "Female")]));
        assert!(!applied);
        assert_eq!(dashboard.records().len(), 1);
        assert_eq!(dashboard.records()[0].id.as_str(), "mine");
    }

    #[test]
    fn test_failed_load_keeps_message() {
        let mut dashboard = Dashboard::new(());
        dashboard.begin_load();
        dashboard.finish_load(LoadResult::Failed(
            "Failed to load users from CSV (status 404).".to_string(),
        ));
        let message = dashboard.status().error().unwrap();
        assert!(message.contains("404"));
        assert!(dashboard.records().is_empty());
    }

    #[test]
    fn test_cancelled_load_changes_nothing() {
        let mut dashboard = Dashboard::new(());
        dashboard.begin_load();
        assert!(!dashboard.finish_load(LoadResult::Cancelled));
        assert!(dashboard.status().is_loading());
    }

    #[test]
    fn test_mutations_write_through() {
        let mut dashboard = seeded(2);
        dashboard.add_record(record("3", "New", "Female"));
        dashboard.update_record(
            "1",
            &RecordPatch {
                first_name: Some("Renamed".to_string()),
                ..RecordPatch::default()
            },
        );
        dashboard.delete_record("2");
        dashboard.set_page_size(PageSize::Twenty);

        let writes = &dashboard.hook().0;
        assert_eq!(writes.len(), 4);
        let last = writes.last().unwrap();
        assert_eq!(last.records.len(), 2);
        assert_eq!(last.records[0].first_name, "Renamed");
        assert_eq!(last.preferences.page_size, PageSize::Twenty);
    }

    #[test]
    fn test_transient_state_is_not_persisted() {
        let mut dashboard = seeded(2);
        dashboard.set_search("user");
        dashboard.set_gender_filter(GenderFilter::parse("Male"));
        dashboard.toggle_sort(SortKey::Email);
        dashboard.set_page(2);
        dashboard.toggle_selected(&RecordId::from("1"));
        assert!(dashboard.hook().0.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut dashboard = seeded(1);
        assert!(!dashboard.update_record("nope", &RecordPatch::default()));
        assert!(!dashboard.delete_record("nope"));
        assert!(dashboard.hook().0.is_empty());
    }

    #[test]
    fn test_delete_record_drops_it_from_selection() {
        let mut dashboard = seeded(3);
        dashboard.select_many(["1", "2"].into_iter().map(RecordId::from));
        dashboard.delete_record("1");
        assert!(!dashboard.view_state().selection().contains("1"));
        assert!(dashboard.view_state().selection().contains("2"));
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut dashboard = seeded(5);
        dashboard.select_many(["2", "4", "ghost"].into_iter().map(RecordId::from));
        assert_eq!(dashboard.selected_records().len(), 2);

        assert_eq!(dashboard.delete_selected(), 2);
        assert!(dashboard.view_state().selection().is_empty());
        let remaining: Vec<&str> = dashboard.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(remaining, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_render_resets_out_of_range_page() {
        let mut dashboard = seeded(25);
        dashboard.set_page(3);
        assert_eq!(dashboard.view().page_items.len(), 5);

        let gone: BTreeSet<RecordId> = (21..=25).map(|n| RecordId::from(n.to_string())).collect();
        dashboard.delete_many(&gone);
        let view = dashboard.view();
        assert_eq!(view.effective_page, 2);
        assert!(view.needs_page_reset());

        let rendered = dashboard.render();
        assert_eq!(rendered.effective_page, 1);
        assert_eq!(rendered.page_items[0].id.as_str(), "1");
        assert_eq!(dashboard.view_state().current_page(), 1);
    }

    #[test]
    fn test_toggle_page_selection_uses_visible_rows() {
        let mut dashboard = seeded(15);
        dashboard.set_page(2);
        dashboard.toggle_page_selection();
        assert_eq!(dashboard.view_state().selection().len(), 5);
        assert!(dashboard.view_state().selection().contains("11"));

        dashboard.toggle_page_selection();
        assert!(dashboard.view_state().selection().is_empty());
    }

    #[test]
    fn test_create_record_validates() {
        let mut dashboard = Dashboard::new(());
        let invalid = RecordDraft {
            first_name: "Ann".to_string(),
            email: "not-an-email".to_string(),
            ..RecordDraft::default()
        };
        assert!(dashboard.create_record(invalid).is_err());
        assert!(dashboard.records().is_empty());

        let valid = RecordDraft {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            gender: "Female".to_string(),
            ip_address: "192.168.0.1".to_string(),
        };
        let id = dashboard.create_record(valid).unwrap();
        assert_eq!(dashboard.record(id.as_str()).unwrap().first_name, "Ann");
    }

    #[test]
    fn test_state_persister_hook_round_trip() {
        let mut dashboard = Dashboard::new(StatePersister::new(MemoryStore::new()));
        dashboard.add_record(record("1", "Ann", "Female"));
        dashboard.set_page_size(PageSize::Fifty);

        let persister = dashboard.into_hook();
        let restored = persister.load();
        assert_eq!(restored.records.len(), 1);
        assert_eq!(restored.preferences.page_size, PageSize::Fifty);

        let dashboard = Dashboard::with_state(restored, ());
        assert_eq!(dashboard.view_state().page_size(), PageSize::Fifty);
    }
}
