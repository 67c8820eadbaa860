//! Catalog subcommands.
//!
//! Every command takes the resolved [`Settings`](crate::config::Settings)
//! and opens only the collaborators it needs.

pub mod get;
pub mod init_db;
pub mod list;
pub mod sync;
pub mod sync_one;
