//! Sync command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use rebrick_core::EntityKind;
use rebrick_file::FileSnapshotStore;
use rebrick_http::HttpCatalog;
use rebrick_sqlite::SqliteStore;
use rebrick_sync::SyncCoordinator;

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Kinds to synchronize (set, color, minifig, part, part-category); all when omitted
    pub kinds: Vec<EntityKind>,

    /// Exit with an error if any record was not updated
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(settings: &Settings, args: SyncArgs) -> Result<()> {
    let kinds = if args.kinds.is_empty() {
        EntityKind::ALL.to_vec()
    } else {
        args.kinds.clone()
    };

    let coordinator = SyncCoordinator::with_options(
        settings.snapshot_store(),
        settings.remote_catalog()?,
        settings.open_store().await?,
        settings.options,
    );

    let result = sync_kinds(&coordinator, &kinds, &args).await;
    coordinator.store().close().await;
    result
}

async fn sync_kinds(
    coordinator: &SyncCoordinator<FileSnapshotStore, HttpCatalog, SqliteStore>,
    kinds: &[EntityKind],
    args: &SyncArgs,
) -> Result<()> {
    let mut incomplete = Vec::new();

    for &kind in kinds {
        let report = coordinator
            .run(kind)
            .await
            .with_context(|| format!("Failed to sync {}", kind))?;

        info!(
            %kind,
            elapsed_ms = report.elapsed().num_milliseconds(),
            "Run complete"
        );

        output::json_with(&report.collection, args.pretty)?;
        output::summary(&report.summary());

        if args.strict {
            report.failures().for_each(output::failure);
            if let Err(e) = report.ensure_complete() {
                incomplete.push(e.to_string());
            }
        }
    }

    if !incomplete.is_empty() {
        anyhow::bail!(incomplete.join("; "));
    }

    Ok(())
}
