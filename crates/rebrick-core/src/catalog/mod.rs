//! Catalog records and the per-kind descriptors that map them onto the
//! local store.

mod descriptor;
mod outcome;
mod record;

pub use descriptor::{
    COLOR, ColumnValue, EntityDescriptor, FieldSpec, KeySpec, KeyType, MINIFIG, PART,
    PART_CATEGORY, SET,
};
pub use outcome::{RecordOutcome, UpdateOutcome};
pub use record::{Collection, EntityRecord};
