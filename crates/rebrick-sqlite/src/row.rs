//! Row decoding.

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use rebrick_core::EntityRecord;
use rebrick_core::error::{Error, StoreError};

/// Decode a row into a record keyed by column name.
///
/// Values keep their storage class: INTEGER and REAL become JSON numbers,
/// TEXT a string, BLOB a lossy UTF-8 string, NULL a JSON null.
pub(crate) fn row_to_record(row: &SqliteRow) -> Result<EntityRecord, Error> {
    let mut fields = Map::new();

    for column in row.columns() {
        let index = column.ordinal();
        let name = column.name();
        let decode = |e: sqlx::Error| StoreError::Decode {
            column: name.to_string(),
            message: e.to_string(),
        };

        let raw = row.try_get_raw(index).map_err(decode)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(index).map_err(decode)?),
                "REAL" => Value::from(row.try_get::<f64, _>(index).map_err(decode)?),
                "BLOB" => {
                    let bytes = row.try_get::<Vec<u8>, _>(index).map_err(decode)?;
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }
                _ => Value::String(row.try_get::<String, _>(index).map_err(decode)?),
            }
        };

        fields.insert(name.to_string(), value);
    }

    Ok(EntityRecord::new(fields))
}
