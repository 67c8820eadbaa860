//! Generic entity updater.

use tracing::{debug, warn};

use rebrick_core::error::Error;
use rebrick_core::traits::CatalogStore;
use rebrick_core::{
    EntityDescriptor, EntityKind, EntityRecord, NaturalKey, RecordOutcome, Result, UpdateOutcome,
};

/// Applies records of one kind to the local store.
///
/// All five kinds share this type; what differs between them lives in
/// their [`EntityDescriptor`]. Updaters for different keys may run
/// concurrently against the same store.
#[derive(Debug)]
pub struct EntityUpdater<'a, S: ?Sized> {
    store: &'a S,
    descriptor: &'static EntityDescriptor,
}

impl<'a, S> EntityUpdater<'a, S>
where
    S: CatalogStore + ?Sized,
{
    /// Create an updater for a kind's built-in descriptor.
    pub fn new(store: &'a S, kind: EntityKind) -> Self {
        Self::with_descriptor(store, kind.descriptor())
    }

    /// Create an updater for a custom descriptor.
    pub fn with_descriptor(store: &'a S, descriptor: &'static EntityDescriptor) -> Self {
        Self { store, descriptor }
    }

    /// Overwrite the upstream-owned columns of `key`'s row from `record`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no row carries the key; store and input
    /// errors are passed through.
    pub async fn try_update(&self, key: &NaturalKey, record: &EntityRecord) -> Result<()> {
        let values = self.descriptor.extract_values(record);

        let affected = self
            .store
            .apply_update(self.descriptor, key, &values)
            .await?;

        if affected == 0 {
            return Err(Error::NotFound {
                kind: self.descriptor.kind,
                key: key.clone(),
            });
        }

        Ok(())
    }

    /// Like [`try_update`](Self::try_update), folding errors into an outcome.
    pub async fn update(&self, key: &NaturalKey, record: &EntityRecord) -> UpdateOutcome {
        match self.try_update(key, record).await {
            Ok(()) => UpdateOutcome::Updated,
            Err(e) => UpdateOutcome::from_error(&e),
        }
    }

    /// Apply a record whose key is read from the record itself.
    ///
    /// Never fails: every problem is logged and reported in the outcome.
    pub async fn update_record(&self, record: &EntityRecord) -> RecordOutcome {
        let kind = self.descriptor.kind;

        let key = match self.descriptor.extract_key(record) {
            Ok(key) => key,
            Err(e) => {
                warn!(%kind, error = %e, "Skipping malformed record");
                return RecordOutcome {
                    key: None,
                    outcome: UpdateOutcome::from_error(&e),
                };
            }
        };

        debug!(%kind, %key, name = record.label(), "Updating record");

        let outcome = self.update(&key, record).await;
        match &outcome {
            UpdateOutcome::Updated => {}
            UpdateOutcome::NotFound => {
                debug!(%kind, %key, "No local row for record");
            }
            UpdateOutcome::Malformed { reason } | UpdateOutcome::Failed { reason } => {
                warn!(%kind, %key, %reason, "Record update failed");
            }
        }

        RecordOutcome {
            key: Some(key),
            outcome,
        }
    }
}
