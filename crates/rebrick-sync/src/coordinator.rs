//! Collection-level synchronization.

use chrono::Utc;
use futures_util::StreamExt;
use futures_util::stream;
use tracing::{debug, info, instrument, warn};

use rebrick_core::traits::{CatalogRemote, CatalogStore, SnapshotSource};
use rebrick_core::{Collection, EntityKind, RecordOutcome, Result};

use crate::report::{CollectionSource, SyncReport};
use crate::single::SingleEntitySync;
use crate::strategy::{SourceStrategy, SyncOptions};
use crate::updater::EntityUpdater;

/// Drives synchronization runs for every entity kind.
///
/// A run resolves one collection, applies each record to the store and
/// returns the collection along with per-record outcomes. Runs hold no
/// state between calls, so one coordinator can serve several kinds
/// concurrently.
#[derive(Debug)]
pub struct SyncCoordinator<L, R, S> {
    snapshots: L,
    remote: R,
    store: S,
    options: SyncOptions,
}

impl<L, R, S> SyncCoordinator<L, R, S>
where
    L: SnapshotSource,
    R: CatalogRemote,
    S: CatalogStore,
{
    /// Create a coordinator with default options.
    pub fn new(snapshots: L, remote: R, store: S) -> Self {
        Self::with_options(snapshots, remote, store, SyncOptions::default())
    }

    /// Create a coordinator with explicit options.
    pub fn with_options(snapshots: L, remote: R, store: S, options: SyncOptions) -> Self {
        Self {
            snapshots,
            remote,
            store,
            options,
        }
    }

    /// Returns the run options.
    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Returns the snapshot source.
    pub fn snapshots(&self) -> &L {
        &self.snapshots
    }

    /// Returns the remote catalog.
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Returns the local store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Single-entity sync sharing this coordinator's remote and store.
    pub fn single(&self) -> SingleEntitySync<'_, R, S> {
        SingleEntitySync::new(&self.remote, &self.store)
    }

    /// Synchronize one kind.
    ///
    /// Every record of the resolved collection is attempted exactly
    /// once, and the report is only returned after all attempts have
    /// finished. Per-record failures end up in the report's outcomes.
    ///
    /// # Errors
    ///
    /// Fails without touching the store when no collection can be
    /// resolved: the remote fetch fails, or under
    /// [`SourceStrategy::SnapshotOnly`] the snapshot is unusable.
    #[instrument(skip(self), fields(strategy = %self.options.strategy))]
    pub async fn run(&self, kind: EntityKind) -> Result<SyncReport> {
        let started_at = Utc::now();

        let (collection, source) = self.resolve(kind).await?;
        let outcomes = self.fan_out(kind, &collection).await;

        let report = SyncReport {
            kind,
            source,
            collection,
            outcomes,
            started_at,
            finished_at: Utc::now(),
        };

        let summary = report.summary();
        info!(
            %kind,
            %source,
            total = summary.total,
            updated = summary.updated,
            not_found = summary.not_found,
            malformed = summary.malformed,
            failed = summary.failed,
            "Sync finished"
        );

        Ok(report)
    }

    async fn resolve(&self, kind: EntityKind) -> Result<(Collection, CollectionSource)> {
        match self.options.strategy {
            SourceStrategy::CacheFirst => {
                let snapshot = self.snapshots.load(kind).await;
                if !snapshot.is_empty() {
                    debug!(%kind, records = snapshot.len(), "Using snapshot");
                    return Ok((snapshot, CollectionSource::Snapshot));
                }
                self.fetch(kind).await
            }
            SourceStrategy::RemoteOnly => self.fetch(kind).await,
            SourceStrategy::SnapshotOnly => {
                let snapshot = self.snapshots.try_load(kind).await?;
                debug!(%kind, records = snapshot.len(), "Using snapshot");
                Ok((snapshot, CollectionSource::Snapshot))
            }
        }
    }

    async fn fetch(&self, kind: EntityKind) -> Result<(Collection, CollectionSource)> {
        debug!(%kind, "Fetching collection from remote catalog");

        match self.remote.fetch_collection(kind).await {
            Ok(collection) => {
                debug!(%kind, records = collection.len(), "Fetched collection");
                Ok((collection, CollectionSource::Remote))
            }
            Err(e) => {
                warn!(%kind, error = %e, "Remote fetch failed");
                Err(e)
            }
        }
    }

    async fn fan_out(&self, kind: EntityKind, collection: &Collection) -> Vec<RecordOutcome> {
        let updater = &EntityUpdater::new(&self.store, kind);
        let width = self.options.concurrency.width(collection.len());

        debug!(%kind, records = collection.len(), width, "Applying records");

        stream::iter(collection.iter())
            .map(move |record| updater.update_record(record))
            .buffer_unordered(width)
            .collect()
            .await
    }
}
