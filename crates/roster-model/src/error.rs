use thiserror::Error;

/// Errors raised when parsing model values from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid page size '{0}' (expected one of 10, 20, 50, 100)")]
    InvalidPageSize(String),
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownSortDirection(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
