//! Settings shared by every command.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use directories::ProjectDirs;

use rebrick_core::CatalogUrl;
use rebrick_file::FileSnapshotStore;
use rebrick_http::HttpCatalog;
use rebrick_sqlite::SqliteStore;
use rebrick_sync::{Concurrency, DEFAULT_CONCURRENCY, SourceStrategy, SyncOptions};

pub const DEFAULT_REMOTE: &str = "http://localhost:9000/rebrickapi";

#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// SQLite database file [default: <data dir>/catalog.db]
    #[arg(long, env = "REBRICK_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Directory holding snapshot files [default: <data dir>/rebrickData]
    #[arg(long, env = "REBRICK_SNAPSHOTS", global = true)]
    pub snapshots: Option<PathBuf>,

    /// Catalog service base URL
    #[arg(long, env = "REBRICK_REMOTE", default_value = DEFAULT_REMOTE, global = true)]
    pub remote: String,

    /// Per-request timeout for the catalog service, in seconds
    #[arg(long, env = "REBRICK_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Maximum record updates in flight (0 = unbounded)
    #[arg(long, env = "REBRICK_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY, global = true)]
    pub concurrency: usize,

    /// Where collections come from: cache-first, remote-only, snapshot-only
    #[arg(long, default_value = "cache-first", global = true)]
    pub strategy: SourceStrategy,
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: PathBuf,
    pub snapshots: PathBuf,
    pub remote: CatalogUrl,
    pub timeout: Duration,
    pub options: SyncOptions,
}

impl Settings {
    pub fn resolve(args: SettingsArgs) -> Result<Self> {
        let database = match args.database {
            Some(path) => path,
            None => data_dir()?.join("catalog.db"),
        };
        let snapshots = match args.snapshots {
            Some(path) => path,
            None => data_dir()?.join("rebrickData"),
        };

        let remote = CatalogUrl::new(&args.remote).context("Invalid catalog URL")?;

        if args.timeout_secs == 0 {
            anyhow::bail!("Timeout must be at least one second");
        }

        Ok(Self {
            database,
            snapshots,
            remote,
            timeout: Duration::from_secs(args.timeout_secs),
            options: SyncOptions {
                strategy: args.strategy,
                concurrency: Concurrency::from_limit(args.concurrency),
            },
        })
    }

    /// Open the local store, creating its file and tables if needed.
    pub async fn open_store(&self) -> Result<SqliteStore> {
        if let Some(parent) = self.database.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create database directory")?;
        }

        let store = SqliteStore::open(&self.database)
            .await
            .with_context(|| format!("Failed to open {}", self.database.display()))?;
        store
            .migrate()
            .await
            .context("Failed to create catalog tables")?;

        Ok(store)
    }

    pub fn snapshot_store(&self) -> FileSnapshotStore {
        FileSnapshotStore::new(&self.snapshots)
    }

    pub fn remote_catalog(&self) -> Result<HttpCatalog> {
        HttpCatalog::with_timeout(self.remote.clone(), self.timeout)
            .context("Failed to build catalog client")
    }
}

fn data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "rebrick").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
