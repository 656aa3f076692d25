//! Error types for Libris Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Top-level error type for all Libris operations
#[derive(Debug, Error)]
pub enum LibrisError {
    #[error("Book with ISBN {isbn} already exists")]
    DuplicateKey { isbn: String },

    /// The remote service has no record for this ISBN.
    /// Local lookups report absence through `Option`/`bool` instead.
    #[error("Book with ISBN {isbn} not found")]
    NotFound { isbn: String },

    #[error("Service unavailable: {0}")]
    RemoteUnavailable(#[from] RemoteFailure),

    #[error("Invalid response format from bibliographic service: {0}")]
    MalformedResponse(String),

    #[error("Failed to save books to {}: {source}", .path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why the remote bibliographic service could not be used
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    #[error("request timed out while fetching book information")]
    Timeout,

    #[error("failed to connect to the bibliographic service")]
    Connect,

    #[error("HTTP error occurred: {0}")]
    Status(u16),

    #[error("unexpected transport error: {0}")]
    Transport(String),
}

/// Coarse classification front ends use to pick a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller asked for something that cannot be done (duplicate, unknown ISBN, bad payload)
    Input,

    /// The remote bibliographic service is unreachable or failing
    Dependency,

    /// Local fault, e.g. the catalog file could not be written
    Internal,
}

impl LibrisError {
    pub fn class(&self) -> ErrorClass {
        match self {
            LibrisError::DuplicateKey { .. }
            | LibrisError::NotFound { .. }
            | LibrisError::MalformedResponse(_) => ErrorClass::Input,
            LibrisError::RemoteUnavailable(_) => ErrorClass::Dependency,
            LibrisError::PersistenceFailure { .. } => ErrorClass::Internal,
        }
    }

    /// Short machine-readable name, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            LibrisError::DuplicateKey { .. } => "duplicate_isbn",
            LibrisError::NotFound { .. } => "not_found",
            LibrisError::RemoteUnavailable(_) => "remote_unavailable",
            LibrisError::MalformedResponse(_) => "malformed_response",
            LibrisError::PersistenceFailure { .. } => "persistence_failure",
        }
    }
}
