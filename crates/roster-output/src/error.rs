//! Error types for export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("JSON encoding failed: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Message suitable for the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Csv { .. } | Self::Json { .. } => {
                "Could not encode the records for export.".to_string()
            }
            Self::Io { path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied writing '{}'.", path.display())
                }
                std::io::ErrorKind::NotFound => {
                    format!("Export folder for '{}' does not exist.", path.display())
                }
                _ => format!("Could not write '{}': {source}", path.display()),
            },
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_user_message_names_the_file() {
        let err = ExportError::io(
            "/tmp/out/users_export_2024-01-01.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.user_message().contains("users_export_2024-01-01.csv"));
        assert!(err.to_string().starts_with("I/O error writing"));
    }
}
