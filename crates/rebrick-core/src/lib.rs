//! rebrick-core - Core catalog types and traits.

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

pub use catalog::{
    ColumnValue, Collection, EntityDescriptor, EntityRecord, FieldSpec, KeySpec, KeyType,
    RecordOutcome, UpdateOutcome,
};
pub use error::Error;
pub use traits::{CatalogRemote, CatalogStore, SnapshotSource};
pub use types::{CatalogUrl, EntityKind, NaturalKey};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
