//! JSON rendering.

use roster_model::Record;

use crate::error::Result;

/// Render records as a pretty-printed JSON array (two-space indent).
pub fn records_to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
