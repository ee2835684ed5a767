//! Roster data ingestion.
//!
//! Loads the initial user list from a comma-separated source the first time
//! the dashboard starts with an empty record store.
//!
//! # Features
//!
//! - **Transports**: local files and HTTP(S), chosen by location
//! - **Parsing**: header-driven column lookup, blank lines skipped, missing
//!   fields read as empty strings; no quote handling
//! - **Cancellation**: a per-load flag so a result arriving after teardown is
//!   discarded instead of applied
//!
//! # Example
//!
//! ```ignore
//! use roster_ingest::{CancelFlag, SourceTransport, load_unless_cancelled, DEFAULT_SOURCE};
//!
//! let cancel = CancelFlag::new();
//! let outcome = load_unless_cancelled(&SourceTransport::default(), DEFAULT_SOURCE, &cancel).await;
//! ```

mod error;
mod loader;
mod parse;
mod transport;

// === Error Types ===
pub use error::{FetchError, Result};

// === Parsing ===
pub use parse::{parse_records, split_line};

// === Transports ===
pub use transport::{DEFAULT_SOURCE, FileTransport, HttpTransport, SourceTransport, Transport};

// === Loading ===
pub use loader::{CancelFlag, LoadOutcome, load_initial, load_unless_cancelled};
