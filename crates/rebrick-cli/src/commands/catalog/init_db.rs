//! Init-db command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct InitDbArgs {
    /// Drop and recreate every catalog table, discarding stored rows
    #[arg(long)]
    pub reset: bool,
}

pub async fn run(settings: &Settings, args: InitDbArgs) -> Result<()> {
    let store = settings.open_store().await?;

    let reset = if args.reset {
        store.reset().await.map(|()| true)
    } else {
        Ok(false)
    };
    store.close().await;

    if reset.context("Failed to reset catalog tables")? {
        output::success("Catalog tables reset");
    } else {
        output::success("Catalog tables ready");
    }

    output::field("Database", &settings.database.display().to_string());

    Ok(())
}
