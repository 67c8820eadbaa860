//! Local store trait.

use async_trait::async_trait;

use crate::Result;
use crate::catalog::{Collection, ColumnValue, EntityDescriptor, EntityRecord};
use crate::types::NaturalKey;

/// The local relational store.
///
/// Sync only ever issues keyed updates through this trait; rows are
/// created and deleted elsewhere.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Overwrite the descriptor's columns of the row with `key`.
    ///
    /// `values` are in descriptor field order. Returns the number of rows
    /// affected, so zero means the key has no row.
    async fn apply_update(
        &self,
        descriptor: &EntityDescriptor,
        key: &NaturalKey,
        values: &[ColumnValue],
    ) -> Result<u64>;

    /// Read one row by natural key.
    async fn fetch_one(
        &self,
        descriptor: &EntityDescriptor,
        key: &NaturalKey,
    ) -> Result<Option<EntityRecord>>;

    /// Read every row of a kind.
    async fn fetch_all(&self, descriptor: &EntityDescriptor) -> Result<Collection>;
}
