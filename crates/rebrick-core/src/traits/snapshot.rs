//! Local snapshot trait.

use async_trait::async_trait;
use tracing::warn;

use crate::catalog::Collection;
use crate::error::CacheMiss;
use crate::types::EntityKind;

/// A previously persisted copy of remote collections.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load the snapshot for a kind, explaining why it is unusable.
    ///
    /// An empty collection is reported as [`CacheMiss::Empty`], so `Ok`
    /// always carries at least one record.
    async fn try_load(&self, kind: EntityKind) -> Result<Collection, CacheMiss>;

    /// Load the snapshot for a kind, treating every miss as empty.
    async fn load(&self, kind: EntityKind) -> Collection {
        match self.try_load(kind).await {
            Ok(collection) => collection,
            Err(miss) => {
                warn!(%kind, %miss, "Snapshot miss, falling back");
                Collection::empty()
            }
        }
    }
}
