//! Snapshot files on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use rebrick_core::error::CacheMiss;
use rebrick_core::traits::SnapshotSource;
use rebrick_core::{Collection, EntityKind};

/// Snapshot directory holding one JSON array per kind.
///
/// The files are written by whatever exports the upstream catalog; this
/// type only reads them.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    /// Create a snapshot store over the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the snapshot directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the snapshot file for a kind.
    pub fn snapshot_path(&self, kind: EntityKind) -> PathBuf {
        self.root.join(Self::file_name(kind))
    }

    fn file_name(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::Set => "sets.json",
            EntityKind::Color => "colors.json",
            EntityKind::Minifig => "minifigs.json",
            EntityKind::Part => "parts.json",
            EntityKind::PartCategory => "part_categories.json",
        }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn try_load(&self, kind: EntityKind) -> Result<Collection, CacheMiss> {
        let path = self.snapshot_path(kind);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CacheMiss::Missing { path });
            }
            Err(e) => {
                return Err(CacheMiss::Unreadable {
                    path,
                    message: e.to_string(),
                });
            }
        };

        let collection: Collection =
            serde_json::from_str(&content).map_err(|e| CacheMiss::Malformed {
                path: path.clone(),
                message: e.to_string(),
            })?;

        if collection.is_empty() {
            return Err(CacheMiss::Empty { path });
        }

        debug!(records = collection.len(), path = %path.display(), "Loaded snapshot");

        Ok(collection)
    }
}
