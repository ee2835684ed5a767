//! Roster dashboard state.
//!
//! Holds the canonical record list, the transient table state (search, gender
//! filter, sort, paging, selection), and the pure pipeline that turns the two
//! into the page the table shows.
//!
//! # Architecture
//!
//! - `records` - ordered record list with CRUD mutators
//! - `view_state` / `selection` - transient table state
//! - `derive` - search, filter, sort, and paginate
//! - `stats` - totals and gender breakdown
//! - `dashboard` - controller that owns both stores and writes through to
//!   persistence
//!
//! # Example
//!
//! ```ignore
//! use roster_persistence::{FileStore, StatePersister};
//! use roster_store::Dashboard;
//!
//! let persister = StatePersister::new(FileStore::new(FileStore::default_dir()));
//! let restored = persister.load();
//! let mut dashboard = Dashboard::with_state(restored, persister);
//! dashboard.set_search("ann");
//! let page = dashboard.render();
//! ```

pub mod dashboard;
pub mod derive;
pub mod records;
pub mod selection;
pub mod stats;
pub mod view_state;

pub use dashboard::{Dashboard, LoadResult, LoadStatus, PersistHook};
pub use derive::{
    DerivedView, derive_view, filter_by_gender, filter_by_search, filtered_sorted, paginate,
    sort_records,
};
pub use records::RecordStore;
pub use selection::Selection;
pub use stats::{DashboardStats, GenderCount, UNKNOWN_GENDER};
pub use view_state::ViewState;
