//! Error types for rebrick.
//!
//! One error type covers every stage of a synchronization run, with
//! explicit variants so callers can tell a recoverable cache miss from a
//! fatal remote failure or a per-record store problem.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{EntityKind, NaturalKey};

/// The unified error type for rebrick operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The catalog service answered with a non-success status.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Local store errors.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No usable snapshot for a kind.
    #[error("snapshot unavailable: {0}")]
    CacheMiss(#[from] CacheMiss),

    /// The natural key has no row in the local store.
    #[error("{kind} '{key}' not found in local store")]
    NotFound { kind: EntityKind, key: NaturalKey },

    /// Input validation errors (unknown kind, bad URL, malformed record).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Some records of a batch were not updated.
    ///
    /// Only produced when a caller opts into strict reporting.
    #[error("sync incomplete: {failed} of {total} {kind} records not updated")]
    PartialSync {
        kind: EntityKind,
        failed: usize,
        total: usize,
    },
}

impl Error {
    /// Returns true if the error means a row or remote record does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Remote(remote) => remote.status == 404,
            _ => false,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the catalog service.
#[derive(Debug)]
pub struct RemoteError {
    /// HTTP status code.
    pub status: u16,
    /// Response body, if the service sent one.
    pub message: Option<String>,
}

impl RemoteError {
    /// Create a new remote error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for RemoteError {}

/// Local store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening the database failed.
    #[error("failed to open database: {message}")]
    Open { message: String },

    /// A statement failed to execute.
    #[error("database error: {message}")]
    Database { message: String },

    /// A stored value could not be read back.
    #[error("failed to decode column '{column}': {message}")]
    Decode { column: String, message: String },
}

/// Why a snapshot could not stand in for a remote fetch.
///
/// Never fatal under the default strategy: any miss falls through to the
/// remote catalog.
#[derive(Debug, Error)]
pub enum CacheMiss {
    /// No snapshot file exists.
    #[error("no snapshot at {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    /// The file is not a JSON array of objects.
    #[error("failed to parse {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    /// The snapshot decoded to an empty collection.
    #[error("snapshot {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Unknown entity kind.
    #[error("unknown entity kind '{value}'")]
    Kind { value: String },

    /// Unknown source strategy.
    #[error("unknown source strategy '{value}'")]
    Strategy { value: String },

    /// Invalid catalog URL.
    #[error("invalid catalog URL '{value}': {reason}")]
    CatalogUrl { value: String, reason: String },

    /// Invalid natural key.
    #[error("invalid key '{value}': {reason}")]
    Key { value: String, reason: String },

    /// A record that cannot be applied to its kind.
    #[error("malformed {kind} record: {reason}")]
    Record { kind: EntityKind, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_display_includes_body() {
        let err = RemoteError::new(503, Some("upstream down".to_string()));
        assert_eq!(err.to_string(), "HTTP 503: upstream down");
        assert_eq!(RemoteError::new(500, None).to_string(), "HTTP 500");
    }

    #[test]
    fn not_found_detection() {
        assert!(Error::Remote(RemoteError::new(404, None)).is_not_found());
        assert!(!Error::Remote(RemoteError::new(500, None)).is_not_found());
        let err = Error::NotFound {
            kind: EntityKind::Set,
            key: NaturalKey::new("7140-1").unwrap(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "set '7140-1' not found in local store");
    }
}
