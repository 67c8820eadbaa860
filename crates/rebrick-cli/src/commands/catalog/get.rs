//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rebrick_core::traits::CatalogStore;
use rebrick_core::{EntityKind, EntityRecord, NaturalKey};
use rebrick_sqlite::SqliteStore;

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Entity kind
    pub kind: EntityKind,

    /// Natural key of the row
    pub key: NaturalKey,
}

pub async fn run(settings: &Settings, args: GetArgs) -> Result<()> {
    let store = settings.open_store().await?;
    let result = read_row(&store, &args).await;
    store.close().await;

    output::json_pretty(&result?)
}

async fn read_row(store: &SqliteStore, args: &GetArgs) -> Result<EntityRecord> {
    store
        .fetch_one(args.kind.descriptor(), &args.key)
        .await
        .context("Failed to read row")?
        .with_context(|| format!("No {} '{}' in the local store", args.kind, args.key))
}
