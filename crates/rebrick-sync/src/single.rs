//! Single-item synchronization.

use tracing::{debug, instrument};

use rebrick_core::error::Error;
use rebrick_core::traits::{CatalogRemote, CatalogStore};
use rebrick_core::{EntityKind, EntityRecord, NaturalKey, Result};

use crate::updater::EntityUpdater;

/// Refreshes one stored row from the remote detail endpoint.
#[derive(Debug)]
pub struct SingleEntitySync<'a, R: ?Sized, S: ?Sized> {
    remote: &'a R,
    store: &'a S,
}

impl<'a, R, S> SingleEntitySync<'a, R, S>
where
    R: CatalogRemote + ?Sized,
    S: CatalogStore + ?Sized,
{
    pub fn new(remote: &'a R, store: &'a S) -> Self {
        Self { remote, store }
    }

    /// Fetch `key`'s detail record, apply it, and return the stored row.
    ///
    /// # Errors
    ///
    /// Any fetch failure is returned before the store is touched. A key
    /// with no local row yields [`Error::NotFound`].
    #[instrument(skip(self, key), fields(key = %key))]
    pub async fn sync_one(&self, kind: EntityKind, key: &NaturalKey) -> Result<EntityRecord> {
        let detail = self.remote.fetch_detail(kind, key).await?;
        debug!(name = detail.label(), "Fetched detail record");

        EntityUpdater::new(self.store, kind)
            .try_update(key, &detail)
            .await?;

        self.store
            .fetch_one(kind.descriptor(), key)
            .await?
            .ok_or_else(|| Error::NotFound {
                kind,
                key: key.clone(),
            })
    }
}
