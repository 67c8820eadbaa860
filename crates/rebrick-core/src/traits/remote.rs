//! Remote catalog trait.

use async_trait::async_trait;

use crate::Result;
use crate::catalog::{Collection, EntityRecord};
use crate::types::{EntityKind, NaturalKey};

/// The upstream catalog service.
///
/// Implementations do not retry; a failed call is reported once.
#[async_trait]
pub trait CatalogRemote: Send + Sync {
    /// Fetch the entire collection of one kind.
    async fn fetch_collection(&self, kind: EntityKind) -> Result<Collection>;

    /// Fetch the detail record of one item.
    async fn fetch_detail(&self, kind: EntityKind, key: &NaturalKey) -> Result<EntityRecord>;
}
