//! rebrick - CLI tool for keeping a local LEGO catalog in sync.
//!
//! A thin wrapper over the `rebrick-*` crates: it resolves settings,
//! opens the SQLite store and runs synchronization for one or more
//! entity kinds.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::catalog;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let settings = config::Settings::resolve(cli.settings)?;

    match cli.command {
        Commands::InitDb(args) => catalog::init_db::run(&settings, args).await,
        Commands::Sync(args) => catalog::sync::run(&settings, args).await,
        Commands::SyncOne(args) => catalog::sync_one::run(&settings, args).await,
        Commands::Get(args) => catalog::get::run(&settings, args).await,
        Commands::List(args) => catalog::list::run(&settings, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays machine-readable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
