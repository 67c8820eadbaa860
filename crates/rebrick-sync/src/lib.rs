//! rebrick-sync - Catalog synchronization pipeline.
//!
//! A run resolves an authoritative [`Collection`](rebrick_core::Collection)
//! for one kind (snapshot first, remote catalog as fallback) and applies
//! every record to the local store through one generic [`EntityUpdater`].
//!
//! ```no_run
//! use rebrick_core::{CatalogUrl, EntityKind};
//! use rebrick_file::FileSnapshotStore;
//! use rebrick_http::HttpCatalog;
//! use rebrick_sqlite::SqliteStore;
//! use rebrick_sync::SyncCoordinator;
//!
//! # async fn example() -> Result<(), rebrick_core::Error> {
//! let snapshots = FileSnapshotStore::new("rebrickData");
//! let remote = HttpCatalog::new(CatalogUrl::new("http://localhost:9000/rebrickapi")?)?;
//! let store = SqliteStore::open("catalog.db").await?;
//!
//! let coordinator = SyncCoordinator::new(snapshots, remote, store);
//! let report = coordinator.run(EntityKind::Color).await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

mod coordinator;
mod report;
mod single;
mod strategy;
mod updater;

pub use coordinator::SyncCoordinator;
pub use report::{CollectionSource, SyncReport, SyncSummary};
pub use single::SingleEntitySync;
pub use strategy::{Concurrency, DEFAULT_CONCURRENCY, SourceStrategy, SyncOptions};
pub use updater::EntityUpdater;
