//! One-shot initial load with a stale-response guard.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use roster_model::Record;

use crate::error::{FetchError, Result};
use crate::parse::parse_records;
use crate::transport::Transport;

/// Fetch `location` and parse it into records.
pub async fn load_initial<T: Transport>(transport: &T, location: &str) -> Result<Vec<Record>> {
    tracing::info!(location, "loading initial records");
    let text = transport.fetch(location).await?;
    let records = parse_records(&text);
    tracing::info!(location, records = records.len(), "parsed initial records");
    Ok(records)
}

/// Per-invocation cancellation flag.
///
/// The owner raises it when it is torn down; a load that resolves afterwards
/// reports [`LoadOutcome::Cancelled`] and its result is dropped.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Result of a guarded load.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Record>),
    Failed(FetchError),
    /// The owner went away before the fetch resolved.
    Cancelled,
}

impl LoadOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Run [`load_initial`] and discard its result if `cancel` was raised
/// before it resolved.
pub async fn load_unless_cancelled<T: Transport>(
    transport: &T,
    location: &str,
    cancel: &CancelFlag,
) -> LoadOutcome {
    let result = load_initial(transport, location).await;
    if cancel.is_cancelled() {
        tracing::debug!(location, "discarding load result after cancellation");
        return LoadOutcome::Cancelled;
    }
    match result {
        Ok(records) => LoadOutcome::Loaded(records),
        Err(e) => {
            tracing::warn!(location, error = %e, "initial load failed");
            LoadOutcome::Failed(e)
        }
    }
}
