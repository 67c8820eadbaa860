//! Subcommand implementations.

pub mod catalog;
