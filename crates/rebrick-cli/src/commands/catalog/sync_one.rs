//! Sync-one command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rebrick_core::{EntityKind, NaturalKey};
use rebrick_sync::SingleEntitySync;

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct SyncOneArgs {
    /// Entity kind
    pub kind: EntityKind,

    /// Natural key of the item (e.g. 75192-1, 3001, 15)
    pub key: NaturalKey,
}

pub async fn run(settings: &Settings, args: SyncOneArgs) -> Result<()> {
    let remote = settings.remote_catalog()?;
    let store = settings.open_store().await?;

    let result = SingleEntitySync::new(&remote, &store)
        .sync_one(args.kind, &args.key)
        .await
        .with_context(|| format!("Failed to sync {} '{}'", args.kind, args.key));
    store.close().await;

    output::json_pretty(&result?)
}
