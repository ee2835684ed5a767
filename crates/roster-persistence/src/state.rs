//! Persisted dashboard state and its storage envelope.

use roster_model::{PageSize, Record};
use serde::{Deserialize, Serialize};

/// Namespace key of the single storage entry.
pub const STORAGE_KEY: &str = "user-dashboard-store";

/// Schema version written into every envelope.
pub const CURRENT_SCHEMA_VERSION: u32 = 0;

/// User preferences that survive a reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub page_size: PageSize,
}

/// The persisted subset of dashboard state.
///
/// Search text, filters, sort, selection, and current page are transient and
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub records: Vec<Record>,
    pub preferences: Preferences,
}

/// On-disk wrapper: `{"state": {...}, "version": 0}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub state: T,
    pub version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::RecordId;

    #[test]
    fn envelope_shape() {
        let state = PersistedState {
            records: vec![Record {
                id: RecordId::new("1"),
                first_name: "Ann".to_string(),
                ..Record::default()
            }],
            preferences: Preferences {
                page_size: PageSize::Fifty,
            },
        };
        let envelope = Envelope {
            state: &state,
            version: CURRENT_SCHEMA_VERSION,
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["preferences"]["pageSize"], 50);
        assert_eq!(value["state"]["records"][0]["first_name"], "Ann");
    }

    #[test]
    fn missing_preferences_default() {
        let state: PersistedState = serde_json::from_str(r#"{"records":[]}"#).unwrap();
        assert_eq!(state.preferences.page_size, PageSize::Ten);
    }
}
