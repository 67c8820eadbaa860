//! Per-record update results.

use serde::Serialize;

use crate::error::{Error, InvalidInputError};
use crate::types::NaturalKey;

/// Result of applying one record to the local store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// The row was found and its upstream-owned columns overwritten.
    Updated,
    /// No row carries the record's natural key.
    NotFound,
    /// The record cannot be applied to its kind.
    Malformed { reason: String },
    /// The write itself failed.
    Failed { reason: String },
}

impl UpdateOutcome {
    /// Returns true if the row was updated.
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }

    /// Classify an update error.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::NotFound { .. } => UpdateOutcome::NotFound,
            Error::InvalidInput(
                reason @ (InvalidInputError::Record { .. } | InvalidInputError::Key { .. }),
            ) => UpdateOutcome::Malformed {
                reason: reason.to_string(),
            },
            other => UpdateOutcome::Failed {
                reason: other.to_string(),
            },
        }
    }
}

/// An [`UpdateOutcome`] tagged with the record it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    /// Natural key of the record, if one could be read.
    pub key: Option<NaturalKey>,
    #[serde(flatten)]
    pub outcome: UpdateOutcome,
}
