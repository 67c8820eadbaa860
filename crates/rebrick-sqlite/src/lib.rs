//! rebrick-sqlite - SQLite-backed local catalog store.

mod row;
mod schema;
mod store;

pub use store::{DEFAULT_MAX_CONNECTIONS, SqliteStore};
