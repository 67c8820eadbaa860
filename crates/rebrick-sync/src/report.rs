//! Results of a synchronization run.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use rebrick_core::error::Error;
use rebrick_core::{Collection, EntityKind, RecordOutcome, Result, UpdateOutcome};

/// Where a run's collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionSource {
    Snapshot,
    Remote,
}

impl fmt::Display for CollectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionSource::Snapshot => f.write_str("snapshot"),
            CollectionSource::Remote => f.write_str("remote"),
        }
    }
}

/// A completed run.
///
/// Receiving a report at all means the run succeeded: per-record
/// failures are recorded in [`outcomes`](Self::outcomes) but never turn
/// the run into an error. Callers wanting that can use
/// [`ensure_complete`](Self::ensure_complete).
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub kind: EntityKind,
    pub source: CollectionSource,
    /// The resolved collection as it was before any update.
    pub collection: Collection,
    /// One entry per record, in completion order.
    pub outcomes: Vec<RecordOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SyncReport {
    /// Count outcomes by status.
    pub fn summary(&self) -> SyncSummary {
        let mut summary = SyncSummary {
            kind: self.kind,
            source: self.source,
            total: self.outcomes.len(),
            ..SyncSummary::default()
        };

        for outcome in &self.outcomes {
            match outcome.outcome {
                UpdateOutcome::Updated => summary.updated += 1,
                UpdateOutcome::NotFound => summary.not_found += 1,
                UpdateOutcome::Malformed { .. } => summary.malformed += 1,
                UpdateOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        summary
    }

    /// Records that were not updated.
    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_updated())
    }

    /// Wall-clock duration of the run.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Fail unless every record was updated.
    pub fn ensure_complete(self) -> Result<Self> {
        let failed = self.failures().count();
        if failed > 0 {
            return Err(Error::PartialSync {
                kind: self.kind,
                failed,
                total: self.outcomes.len(),
            });
        }
        Ok(self)
    }
}

/// Outcome counts of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub kind: EntityKind,
    pub source: CollectionSource,
    pub total: usize,
    pub updated: usize,
    pub not_found: usize,
    pub malformed: usize,
    pub failed: usize,
}

impl Default for SyncSummary {
    fn default() -> Self {
        Self {
            kind: EntityKind::Set,
            source: CollectionSource::Snapshot,
            total: 0,
            updated: 0,
            not_found: 0,
            malformed: 0,
            failed: 0,
        }
    }
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} records from {} ({} updated, {} not found, {} malformed, {} failed)",
            self.kind,
            self.total,
            self.source,
            self.updated,
            self.not_found,
            self.malformed,
            self.failed
        )
    }
}
