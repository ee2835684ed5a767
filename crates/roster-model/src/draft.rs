//! Create/edit form input and its validation.
//!
//! Validation lives at the form boundary only. The record store trusts its
//! callers and never validates.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::record::{Record, RecordId, RecordPatch};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email pattern: {e}"))
});

/// Form input for creating or editing a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub ip_address: String,
}

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All rejected fields of a draft, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record: {}", summarize(.0))]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for a field, if it was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl RecordDraft {
    /// Prefill the form from an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            gender: record.gender.clone(),
            ip_address: record.ip_address.clone(),
        }
    }

    /// Check required fields, email shape, and IP shape.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = Vec::new();
        let mut reject = |field: &'static str, message: &str| {
            errors.push(FieldError {
                field,
                message: message.to_string(),
            });
        };

        if self.first_name.trim().is_empty() {
            reject("first_name", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            reject("last_name", "Last name is required");
        }
        if self.email.trim().is_empty() {
            reject("email", "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            reject("email", "Invalid email format");
        }
        if self.gender.trim().is_empty() {
            reject("gender", "Gender is required");
        }
        if self.ip_address.trim().is_empty() {
            reject("ip_address", "IP address is required");
        } else if self.ip_address.trim().parse::<IpAddr>().is_err() {
            reject("ip_address", "Invalid IP address format");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// Build a new record with a freshly generated id.
    pub fn into_record(self) -> Record {
        Record {
            id: RecordId::generate(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            gender: self.gender,
            ip_address: self.ip_address,
        }
    }

    /// Build a patch that overwrites every editable field.
    pub fn into_patch(self) -> RecordPatch {
        RecordPatch {
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            gender: Some(self.gender),
            ip_address: Some(self.ip_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RecordDraft {
        RecordDraft {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            gender: "Female".to_string(),
            ip_address: "192.168.0.10".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = RecordDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.message_for("email"), Some("Email is required"));
    }

    #[test]
    fn email_shape_is_checked() {
        let draft = RecordDraft {
            email: "not-an-email".to_string(),
            ..valid()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.message_for("email"), Some("Invalid email format"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn ip_shape_is_checked() {
        let draft = RecordDraft {
            ip_address: "999.1.1.1".to_string(),
            ..valid()
        };
        assert!(draft.validate().is_err());

        let v6 = RecordDraft {
            ip_address: "2001:db8::1".to_string(),
            ..valid()
        };
        assert!(v6.validate().is_ok());
    }

    #[test]
    fn error_display_lists_fields() {
        let draft = RecordDraft {
            first_name: " ".to_string(),
            ..valid()
        };
        let message = draft.validate().unwrap_err().to_string();
        assert_eq!(message, "invalid record: first_name: First name is required");
    }

    #[test]
    fn into_record_generates_id() {
        let record = valid().into_record();
        assert!(!record.id.as_str().is_empty());
        assert_eq!(record.first_name, "Ann");
    }
}
