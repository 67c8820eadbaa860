//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use rebrick_core::EntityKind;
use rebrick_core::traits::CatalogStore;

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Entity kind
    pub kind: EntityKind,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(settings: &Settings, args: ListArgs) -> Result<()> {
    let store = settings.open_store().await?;
    let result = store.fetch_all(args.kind.descriptor()).await;
    store.close().await;

    let rows = result.context("Failed to read rows")?;

    if rows.is_empty() {
        eprintln!("{}", "No rows found.".dimmed());
    }

    // One row per line unless pretty-printing.
    for row in &rows {
        output::json_with(row, args.pretty)?;
    }

    Ok(())
}
