//! A dashboard backed by the on-disk state, plus the initial load.

use std::path::PathBuf;

use anyhow::{Context, Result};
use roster_ingest::{CancelFlag, LoadOutcome, SourceTransport, Transport, load_unless_cancelled};
use roster_model::PageSize;
use roster_persistence::{FileStore, PersistedState, Preferences, Restore, StatePersister};
use roster_store::{Dashboard, LoadResult};

/// Dashboard that writes through to a [`FileStore`].
pub type FileDashboard = Dashboard<StatePersister<FileStore>>;

/// One CLI invocation's view of the dashboard.
pub struct Session {
    dashboard: FileDashboard,
}

impl Session {
    /// Restore state from `data_dir`. A first run, or unreadable state, starts
    /// empty with `default_page_size`.
    pub fn open(data_dir: impl Into<PathBuf>, default_page_size: PageSize) -> Self {
        let persister = StatePersister::new(FileStore::new(data_dir));
        let fresh = || PersistedState {
            records: Vec::new(),
            preferences: Preferences {
                page_size: default_page_size,
            },
        };
        let state = match persister.restore() {
            Restore::Missing => {
                tracing::debug!(key = persister.key(), "first run, starting empty");
                fresh()
            }
            Restore::Restored(state) => {
                tracing::info!(records = state.records.len(), "restored dashboard state");
                state
            }
            Restore::Discarded { reason } => {
                tracing::warn!(key = persister.key(), %reason, "ignoring persisted state");
                fresh()
            }
        };
        Self {
            dashboard: Dashboard::with_state(state, persister),
        }
    }

    pub fn dashboard(&self) -> &FileDashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut FileDashboard {
        &mut self.dashboard
    }

    /// Fetch `location` if the store is empty and apply the result.
    /// Returns whether records were applied.
    pub async fn initial_load<T: Transport>(
        &mut self,
        transport: &T,
        location: &str,
        cancel: &CancelFlag,
    ) -> bool {
        if !self.dashboard.needs_initial_load() {
            tracing::debug!(
                records = self.dashboard.records().len(),
                "store populated, skipping initial load"
            );
            return false;
        }
        self.dashboard.begin_load();
        let outcome = load_unless_cancelled(transport, location, cancel).await;
        self.dashboard.finish_load(load_result(outcome))
    }

    /// Run [`Session::initial_load`] on a current-thread runtime with the
    /// default transports.
    pub fn ensure_loaded(&mut self, location: &str) -> Result<bool> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("start async runtime")?;
        let transport = SourceTransport::default();
        let cancel = CancelFlag::new();
        Ok(runtime.block_on(self.initial_load(&transport, location, &cancel)))
    }
}

/// Hand a fetch outcome to the dashboard, keeping the banner text.
fn load_result(outcome: LoadOutcome) -> LoadResult {
    match outcome {
        LoadOutcome::Loaded(records) => LoadResult::Loaded(records),
        LoadOutcome::Failed(e) => LoadResult::Failed(e.user_message()),
        LoadOutcome::Cancelled => LoadResult::Cancelled,
    }
}
