//! Transports that fetch the raw source text.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FetchError, Result};

/// Location used when none is configured.
pub const DEFAULT_SOURCE: &str = "data/mock_data.csv";

/// Fetches raw text from a location.
///
/// The fetch suspends the calling task only. Implementations add no timeout
/// and no retry; whatever the underlying transport reports is returned.
pub trait Transport {
    fn fetch(&self, location: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP(S) transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, location: &str) -> Result<String> {
        tracing::debug!(location, "requesting source over HTTP");
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                location: location.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            location: location.to_string(),
            message: e.to_string(),
        })
    }
}

/// Local file transport. Relative locations resolve against `root`.
#[derive(Debug, Clone, Default)]
pub struct FileTransport {
    root: Option<PathBuf>,
}

impl FileTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Path a location resolves to.
    pub fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(location.strip_prefix("file://").unwrap_or(location));
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Transport for FileTransport {
    async fn fetch(&self, location: &str) -> Result<String> {
        let path = self.resolve(location);
        tracing::debug!(path = %path.display(), "reading source file");
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FetchError::NotFound { path: path.clone() }
            } else {
                FetchError::Io {
                    path: path.clone(),
                    source: e,
                }
            }
        })
    }
}

/// Dispatches `http://` and `https://` locations to HTTP, everything else to
/// the file system.
#[derive(Debug, Clone, Default)]
pub struct SourceTransport {
    http: HttpTransport,
    file: FileTransport,
}

impl SourceTransport {
    pub fn new(http: HttpTransport, file: FileTransport) -> Self {
        Self { http, file }
    }

    pub fn is_remote(location: &str) -> bool {
        let lower = location.trim_start().to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

impl Transport for SourceTransport {
    async fn fetch(&self, location: &str) -> Result<String> {
        if Self::is_remote(location) {
            self.http.fetch(location).await
        } else {
            self.file.fetch(location).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_remote_detection() {
        assert!(SourceTransport::is_remote("https://example.com/users.csv"));
        assert!(SourceTransport::is_remote("HTTP://example.com/users.csv"));
        assert!(!SourceTransport::is_remote("data/mock_data.csv"));
        assert!(!SourceTransport::is_remote("file:///tmp/users.csv"));
    }

    #[test]
    fn test_resolve_relative_against_root() {
        let transport = FileTransport::with_root("/srv/app");
        assert_eq!(
            transport.resolve("data/mock_data.csv"),
            PathBuf::from("/srv/app/data/mock_data.csv")
        );
        assert_eq!(
            transport.resolve("file:///tmp/users.csv"),
            PathBuf::from("/tmp/users.csv")
        );
    }

    #[tokio::test]
    async fn test_file_fetch_reads_text() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("users.csv"), "id\n1\n").unwrap();
        let transport = FileTransport::with_root(dir.path());
        let text = transport.fetch("users.csv").await.unwrap();
        assert_eq!(text, "id\n1\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let transport = SourceTransport::new(
            HttpTransport::new(),
            FileTransport::with_root(dir.path()),
        );
        let err = transport.fetch("missing.csv").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }
}
