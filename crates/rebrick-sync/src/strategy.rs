//! Run options: where a collection comes from and how wide the fan-out is.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use rebrick_core::error::{Error, InvalidInputError};

/// Fan-out width used when none is configured.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Order in which collection sources are tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceStrategy {
    /// Use the snapshot when it holds records, otherwise fetch remotely.
    #[default]
    CacheFirst,
    /// Always fetch remotely; the snapshot is ignored.
    RemoteOnly,
    /// Never contact the remote catalog; a missing snapshot is fatal.
    SnapshotOnly,
}

impl SourceStrategy {
    /// Returns the canonical name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceStrategy::CacheFirst => "cache-first",
            SourceStrategy::RemoteOnly => "remote-only",
            SourceStrategy::SnapshotOnly => "snapshot-only",
        }
    }
}

impl fmt::Display for SourceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cache-first" => Ok(SourceStrategy::CacheFirst),
            "remote-only" => Ok(SourceStrategy::RemoteOnly),
            "snapshot-only" => Ok(SourceStrategy::SnapshotOnly),
            other => Err(InvalidInputError::Strategy {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// How many record updates may be in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// At most this many updates in flight.
    Bounded(NonZeroUsize),
    /// Dispatch every record at once.
    ///
    /// Large collections then open as many simultaneous writes as they
    /// have records.
    Unbounded,
}

impl Concurrency {
    /// Build from a plain count, where zero means unbounded.
    pub fn from_limit(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Concurrency::Unbounded, Concurrency::Bounded)
    }

    /// Effective width for a batch of `batch_len` records.
    pub fn width(&self, batch_len: usize) -> usize {
        match self {
            Concurrency::Bounded(limit) => limit.get().min(batch_len).max(1),
            Concurrency::Unbounded => batch_len.max(1),
        }
    }
}

impl Default for Concurrency {
    fn default() -> Self {
        Concurrency::from_limit(DEFAULT_CONCURRENCY)
    }
}

/// Options for a [`SyncCoordinator`](crate::SyncCoordinator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub strategy: SourceStrategy,
    pub concurrency: Concurrency,
}
