//! Seams between the sync pipeline and its collaborators.

mod remote;
mod snapshot;
mod store;

pub use remote::CatalogRemote;
pub use snapshot::SnapshotSource;
pub use store::CatalogStore;
