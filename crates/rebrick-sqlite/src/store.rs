//! SQLite storage for the local catalog.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
};
use sqlx::Sqlite;
use tracing::{debug, instrument};

use rebrick_core::error::{Error, InvalidInputError, StoreError};
use rebrick_core::traits::CatalogStore;
use rebrick_core::{Collection, ColumnValue, EntityDescriptor, EntityRecord, NaturalKey, Result};

use crate::row::row_to_record;
use crate::schema::{CREATE_TABLES, DROP_TABLES};

/// Connections opened by [`SqliteStore::open`].
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// How long a writer waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

fn map_sqlx(err: sqlx::Error) -> Error {
    Error::Store(StoreError::Database {
        message: err.to_string(),
    })
}

fn map_open(err: sqlx::Error) -> Error {
    Error::Store(StoreError::Open {
        message: err.to_string(),
    })
}

/// SQLite-backed local catalog store.
///
/// Cheap to clone; clones share one connection pool. Every keyed update
/// runs as its own statement, so concurrent updaters never wait on a
/// batch-wide transaction.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Open (or create) a database file with a bounded connection pool.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn open_with(path: impl AsRef<Path>, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(map_open)?;

        debug!(max_connections, "Opened local store");

        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds a single connection that is never recycled, since
    /// each SQLite memory connection is its own database.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(map_open)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(map_open)?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create any missing catalog tables.
    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        for statement in CREATE_TABLES {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        debug!("Catalog tables ready");

        Ok(())
    }

    /// Drop every catalog table and recreate it empty.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        for statement in DROP_TABLES.iter().chain(CREATE_TABLES) {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        debug!("Catalog tables reset");

        Ok(())
    }

    /// Close the pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &ColumnValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        ColumnValue::Null => query.bind(None::<String>),
        ColumnValue::Integer(i) => query.bind(*i),
        ColumnValue::Real(f) => query.bind(*f),
        ColumnValue::Text(s) => query.bind(s.clone()),
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    #[instrument(skip(self, descriptor, values), fields(table = descriptor.table, %key))]
    async fn apply_update(
        &self,
        descriptor: &EntityDescriptor,
        key: &NaturalKey,
        values: &[ColumnValue],
    ) -> Result<u64> {
        if values.len() != descriptor.fields.len() {
            return Err(InvalidInputError::Record {
                kind: descriptor.kind,
                reason: format!(
                    "expected {} column values, got {}",
                    descriptor.fields.len(),
                    values.len()
                ),
            }
            .into());
        }

        let key_value = descriptor.bind_key(key)?;
        let statement = descriptor.update_statement();

        let query = values
            .iter()
            .chain(std::iter::once(&key_value))
            .fold(sqlx::query(&statement), bind_value);

        let result = query.execute(&self.pool).await.map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self, descriptor), fields(table = descriptor.table, %key))]
    async fn fetch_one(
        &self,
        descriptor: &EntityDescriptor,
        key: &NaturalKey,
    ) -> Result<Option<EntityRecord>> {
        let key_value = descriptor.bind_key(key)?;
        let statement = descriptor.select_one_statement();

        let row = bind_value(sqlx::query(&statement), &key_value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.as_ref().map(row_to_record).transpose()
    }

    #[instrument(skip(self, descriptor), fields(table = descriptor.table))]
    async fn fetch_all(&self, descriptor: &EntityDescriptor) -> Result<Collection> {
        let statement = descriptor.select_all_statement();

        let rows = sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.iter().map(row_to_record).collect()
    }
}
