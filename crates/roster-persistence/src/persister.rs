//! Write-through save and fail-open restore of dashboard state.

use crate::error::{PersistenceError, Result};
use crate::state::{CURRENT_SCHEMA_VERSION, Envelope, PersistedState, STORAGE_KEY};
use crate::storage::KeyValueStore;

/// Outcome of reading the storage entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restore {
    /// Nothing stored yet.
    Missing,
    /// Entry decoded successfully.
    Restored(PersistedState),
    /// Entry present but unusable; defaults are used instead.
    Discarded { reason: String },
}

/// Serializes [`PersistedState`] into one namespaced storage entry.
#[derive(Debug, Clone)]
pub struct StatePersister<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StatePersister<S> {
    /// Persister using the default namespace key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the state through to storage.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        let envelope = Envelope {
            state,
            version: CURRENT_SCHEMA_VERSION,
        };
        let json = serde_json::to_string(&envelope)
            .map_err(|source| PersistenceError::Serialization { source })?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(
            key = %self.key,
            records = state.records.len(),
            page_size = state.preferences.page_size.get(),
            "persisted dashboard state"
        );
        Ok(())
    }

    /// Read the entry and report what was found. Never fails.
    pub fn restore(&self) -> Restore {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Restore::Missing,
            Err(e) => {
                return Restore::Discarded {
                    reason: e.to_string(),
                };
            }
        };

        let envelope: Envelope<PersistedState> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                return Restore::Discarded {
                    reason: format!("malformed entry: {e}"),
                };
            }
        };

        if envelope.version > CURRENT_SCHEMA_VERSION {
            return Restore::Discarded {
                reason: format!(
                    "entry version {} is newer than supported version {}",
                    envelope.version, CURRENT_SCHEMA_VERSION
                ),
            };
        }

        Restore::Restored(envelope.state)
    }

    /// Load the persisted state, falling back to defaults on any problem.
    pub fn load(&self) -> PersistedState {
        match self.restore() {
            Restore::Restored(state) => {
                tracing::info!(
                    key = %self.key,
                    records = state.records.len(),
                    "restored dashboard state"
                );
                state
            }
            Restore::Missing => {
                tracing::debug!(key = %self.key, "no persisted state, starting empty");
                PersistedState::default()
            }
            Restore::Discarded { reason } => {
                tracing::warn!(key = %self.key, %reason, "ignoring persisted state");
                PersistedState::default()
            }
        }
    }

    /// Delete the storage entry.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)
    }
}
