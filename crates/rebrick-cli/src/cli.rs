//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::catalog::{get, init_db, list, sync, sync_one};
use crate::config::SettingsArgs;

/// Keep a local LEGO catalog in sync with the upstream catalog service.
#[derive(Parser, Debug)]
#[command(name = "rebrick")]
#[command(author, version = env!("REBRICK_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the catalog tables
    InitDb(init_db::InitDbArgs),

    /// Synchronize whole collections into the local store
    Sync(sync::SyncArgs),

    /// Refresh one item from the remote catalog
    SyncOne(sync_one::SyncOneArgs),

    /// Print one stored row
    Get(get::GetArgs),

    /// Print every stored row of a kind
    List(list::ListArgs),
}
