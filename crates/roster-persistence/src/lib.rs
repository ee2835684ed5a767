//! Durable storage for roster records and preferences.
//!
//! The dashboard keeps a single namespaced entry in a key-value store,
//! modelled on browser local storage:
//!
//! ```text
//! user-dashboard-store => {"state": {"records": [...], "preferences": {"pageSize": 10}}, "version": 0}
//! ```
//!
//! Writes go through on every relevant mutation. Reads fail open: an absent,
//! malformed, or newer-version entry yields empty defaults instead of an error.
//!
//! # Example
//!
//! ```ignore
//! use roster_persistence::{FileStore, StatePersister};
//!
//! let mut persister = StatePersister::new(FileStore::new(FileStore::default_dir()));
//! let state = persister.load();
//! persister.save(&state)?;
//! ```
//!
//! # Architecture
//!
//! - `storage` - `KeyValueStore` trait with file and in-memory backends
//! - `state` - persisted state types and the storage envelope
//! - `persister` - write-through save and fail-open restore
//! - `error` - error types with user-friendly messages

mod error;
mod persister;
mod state;
mod storage;

pub use error::{PersistenceError, Result};
pub use persister::{Restore, StatePersister};
pub use state::{CURRENT_SCHEMA_VERSION, PersistedState, Preferences, STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
