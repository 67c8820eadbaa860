//! rebrick-file - Filesystem-backed snapshot source.

mod snapshot;

pub use snapshot::FileSnapshotStore;
