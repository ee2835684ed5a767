//! User record types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::view::SortKey;

/// Stable identity key of a record.
///
/// Imported rows keep the id from the source verbatim. Records created by hand
/// get an opaque random token from [`RecordId::generate`]. Uniqueness is not
/// checked anywhere.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh random id for a manually created record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One user entity.
///
/// Field names serialize as the CSV column names (`first_name`, `ip_address`,
/// ...). Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub ip_address: String,
}

impl Record {
    /// Value of the given field, used by sorting and tabular output.
    pub fn field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Id => self.id.as_str(),
            SortKey::FirstName => &self.first_name,
            SortKey::LastName => &self.last_name,
            SortKey::Email => &self.email,
            SortKey::Gender => &self.gender,
            SortKey::IpAddress => &self.ip_address,
        }
    }

    /// All fields in column order.
    pub fn values(&self) -> [&str; 6] {
        SortKey::ALL.map(|key| self.field(key))
    }

    /// Merge the fields present in `patch`; the id is never touched.
    pub fn apply(&mut self, patch: &RecordPatch) {
        let RecordPatch {
            first_name,
            last_name,
            email,
            gender,
            ip_address,
        } = patch;
        merge(&mut self.first_name, first_name.as_ref());
        merge(&mut self.last_name, last_name.as_ref());
        merge(&mut self.email, email.as_ref());
        merge(&mut self.gender, gender.as_ref());
        merge(&mut self.ip_address, ip_address.as_ref());
    }
}

fn merge(target: &mut String, value: Option<&String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

/// Partial update for a record. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub ip_address: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.gender.is_none()
            && self.ip_address.is_none()
    }

    /// Names of the fields this patch would change.
    pub fn touched_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", self.first_name.is_some()),
            ("last_name", self.last_name.is_some()),
            ("email", self.email.is_some()),
            ("gender", self.gender.is_some()),
            ("ip_address", self.ip_address.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: RecordId::new("7"),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            gender: "Female".to_string(),
            ip_address: "10.0.0.7".to_string(),
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut record = sample();
        record.apply(&RecordPatch {
            email: Some("ann.lee@example.com".to_string()),
            gender: Some(String::new()),
            ..RecordPatch::default()
        });
        assert_eq!(record.email, "ann.lee@example.com");
        assert_eq!(record.gender, "");
        assert_eq!(record.first_name, "Ann");
        assert_eq!(record.id.as_str(), "7");
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn values_follow_column_order() {
        let record = sample();
        assert_eq!(
            record.values(),
            ["7", "Ann", "Lee", "ann@example.com", "Female", "10.0.0.7"]
        );
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let record: Record = serde_json::from_str(r#"{"id":"3","email":"x@y.z"}"#).unwrap();
        assert_eq!(record.id.as_str(), "3");
        assert_eq!(record.first_name, "");
        assert_eq!(record.email, "x@y.z");
    }

    #[test]
    fn touched_fields_lists_set_fields() {
        let patch = RecordPatch {
            last_name: Some("Kim".to_string()),
            ip_address: Some("::1".to_string()),
            ..RecordPatch::default()
        };
        assert_eq!(patch.touched_fields(), vec!["last_name", "ip_address"]);
        assert!(RecordPatch::default().is_empty());
    }
}
