//! Error types for fetching the ingestion source.
//!
//! Parsing never fails; only getting the raw text can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching the source text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Failed to load CSV from {location}: {status} {reason}")]
    Status {
        location: String,
        status: u16,
        reason: String,
    },

    /// Local source file does not exist.
    #[error("CSV source not found: {path}")]
    NotFound { path: PathBuf },

    /// Local source file could not be read.
    #[error("failed to read CSV source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("request to {location} failed: {message}")]
    Transport { location: String, message: String },
}

impl FetchError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for the error banner shown next to the retry action.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status, .. } => {
                format!("Failed to load users from CSV (status {status}).")
            }
            Self::NotFound { path } => {
                format!("The user list at {} could not be found.", path.display())
            }
            Self::Io { path, .. } => {
                format!("The user list at {} could not be read.", path.display())
            }
            Self::Transport { .. } => {
                "Could not reach the user list. Please check your connection.".to_string()
            }
        }
    }
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
