//! HTTP-backed catalog implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use rebrick_core::traits::CatalogRemote;
use rebrick_core::{CatalogUrl, Collection, EntityKind, EntityRecord, NaturalKey, Result};

use crate::client::{DEFAULT_TIMEOUT, HttpClient};
use crate::endpoints::{collection_path, detail_path};

/// A network-backed upstream catalog.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base: CatalogUrl,
    client: HttpClient,
}

impl HttpCatalog {
    /// Create a catalog client with the default per-request timeout.
    pub fn new(base: CatalogUrl) -> Result<Self> {
        Self::with_timeout(base, DEFAULT_TIMEOUT)
    }

    /// Create a catalog client with a custom per-request timeout.
    ///
    /// A request exceeding the timeout fails with a transport error.
    pub fn with_timeout(base: CatalogUrl, timeout: Duration) -> Result<Self> {
        let client = HttpClient::new(timeout)?;
        Ok(Self { base, client })
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.client.timeout()
    }
}

#[async_trait]
impl CatalogRemote for HttpCatalog {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn fetch_collection(&self, kind: EntityKind) -> Result<Collection> {
        let url = self.base.endpoint([collection_path(kind)]);

        let collection: Collection = self.client.get_json(url).await?;

        debug!(%kind, records = collection.len(), "Fetched collection");

        Ok(collection)
    }

    #[instrument(skip(self), fields(base = %self.base, %key))]
    async fn fetch_detail(&self, kind: EntityKind, key: &NaturalKey) -> Result<EntityRecord> {
        let url = self.base.endpoint([detail_path(kind), key.as_str()]);

        let value: serde_json::Value = self.client.get_json(url).await?;

        EntityRecord::from_value(kind, value)
    }
}
