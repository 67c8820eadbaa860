//! Core catalog types.
//!
//! These types validate at construction time, so a kind name, key or
//! service URL that reaches the pipeline is already known to be usable.

mod catalog_url;
mod kind;
mod natural_key;

pub use catalog_url::CatalogUrl;
pub use kind::EntityKind;
pub use natural_key::NaturalKey;
