//! Per-kind descriptors.
//!
//! A descriptor is everything the generic updater needs to know about a
//! kind: where its rows live, how a record names its row, and which
//! columns the upstream catalog owns. Columns not listed here belong to
//! the local store and are never written by a sync.

use serde_json::Value;

use crate::error::{Error, InvalidInputError};
use crate::types::{EntityKind, NaturalKey};

use super::EntityRecord;

/// SQL type of a natural key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Text,
    Integer,
}

/// How a record's natural key maps onto its key column.
#[derive(Debug, Clone, Copy)]
pub struct KeySpec {
    /// Key column in the local table.
    pub column: &'static str,
    /// JSON pointer to the key inside a record.
    pub pointer: &'static str,
    /// SQL type of the key column.
    pub key_type: KeyType,
}

/// An upstream-owned column and where its value comes from.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column in the local table.
    pub column: &'static str,
    /// JSON pointer to the value inside a record.
    pub pointer: &'static str,
}

/// A value ready to be bound to a statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ColumnValue {
    /// Convert a JSON value into a bindable column value.
    ///
    /// Booleans become 0/1; arrays and objects are stored as JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => ColumnValue::Null,
            Value::Bool(b) => ColumnValue::Integer(i64::from(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ColumnValue::Integer(i),
                None => n.as_f64().map_or(ColumnValue::Null, ColumnValue::Real),
            },
            Value::String(s) => ColumnValue::Text(s.clone()),
            other => ColumnValue::Text(other.to_string()),
        }
    }
}

/// Maps one entity kind onto its local table.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    pub table: &'static str,
    pub key: KeySpec,
    pub fields: &'static [FieldSpec],
}

impl EntityDescriptor {
    /// Keyed UPDATE touching only the upstream-owned columns.
    ///
    /// Parameters are the field values in descriptor order followed by the key.
    pub fn update_statement(&self) -> String {
        let assignments = self
            .fields
            .iter()
            .map(|field| format!("{} = ?", field.column))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.table, assignments, self.key.column
        )
    }

    /// SELECT of one row by natural key.
    pub fn select_one_statement(&self) -> String {
        format!(
            "SELECT * FROM {} WHERE {} = ?",
            self.table, self.key.column
        )
    }

    /// SELECT of every row, ordered by natural key.
    pub fn select_all_statement(&self) -> String {
        format!("SELECT * FROM {} ORDER BY {}", self.table, self.key.column)
    }

    /// Read the natural key out of a record.
    ///
    /// # Errors
    ///
    /// Returns a malformed-record error when the key is missing, is not a
    /// string or integer, or does not fit an integer key column.
    pub fn extract_key(&self, record: &EntityRecord) -> Result<NaturalKey, Error> {
        let value = record.pointer(self.key.pointer).ok_or_else(|| {
            self.malformed(format!("missing key field '{}'", self.key.pointer))
        })?;
        let key = NaturalKey::from_json(value).ok_or_else(|| {
            self.malformed(format!("key field '{}' is not a string or integer", self.key.pointer))
        })?;
        self.bind_key(&key)?;
        Ok(key)
    }

    /// Values for the upstream-owned columns, in descriptor order.
    ///
    /// A field absent from the record binds NULL.
    pub fn extract_values(&self, record: &EntityRecord) -> Vec<ColumnValue> {
        self.fields
            .iter()
            .map(|field| {
                record
                    .pointer(field.pointer)
                    .map_or(ColumnValue::Null, ColumnValue::from_json)
            })
            .collect()
    }

    /// Convert a key into the value bound to the key column.
    pub fn bind_key(&self, key: &NaturalKey) -> Result<ColumnValue, Error> {
        match self.key.key_type {
            KeyType::Text => Ok(ColumnValue::Text(key.as_str().to_string())),
            KeyType::Integer => key.as_integer().map(ColumnValue::Integer).ok_or_else(|| {
                InvalidInputError::Key {
                    value: key.to_string(),
                    reason: format!("{} keys must be integers", self.kind),
                }
                .into()
            }),
        }
    }

    fn malformed(&self, reason: String) -> Error {
        InvalidInputError::Record {
            kind: self.kind,
            reason,
        }
        .into()
    }
}

pub static SET: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Set,
    table: "sets",
    key: KeySpec {
        column: "set_num",
        pointer: "/set_num",
        key_type: KeyType::Text,
    },
    fields: &[
        FieldSpec {
            column: "set_url",
            pointer: "/set_url",
        },
        FieldSpec {
            column: "set_img_url",
            pointer: "/set_img_url",
        },
        FieldSpec {
            column: "last_modified_dt",
            pointer: "/last_modified_dt",
        },
    ],
};

pub static COLOR: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Color,
    table: "colors",
    key: KeySpec {
        column: "id",
        pointer: "/id",
        key_type: KeyType::Integer,
    },
    fields: &[
        FieldSpec {
            column: "rgb",
            pointer: "/rgb",
        },
        FieldSpec {
            column: "is_trans",
            pointer: "/is_trans",
        },
        FieldSpec {
            column: "bricklink_id",
            pointer: "/external_ids/BrickLink/ext_ids/0",
        },
        FieldSpec {
            column: "brickowl_id",
            pointer: "/external_ids/BrickOwl/ext_ids/0",
        },
        FieldSpec {
            column: "lego_id",
            pointer: "/external_ids/LEGO/ext_ids/0",
        },
    ],
};

// Minifigs arrive with their figure number under `set_num`.
pub static MINIFIG: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Minifig,
    table: "minifigs",
    key: KeySpec {
        column: "fig_num",
        pointer: "/set_num",
        key_type: KeyType::Text,
    },
    fields: &[
        FieldSpec {
            column: "fig_url",
            pointer: "/set_url",
        },
        FieldSpec {
            column: "fig_img_url",
            pointer: "/set_img_url",
        },
        FieldSpec {
            column: "last_modified_dt",
            pointer: "/last_modified_dt",
        },
    ],
};

pub static PART: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Part,
    table: "parts",
    key: KeySpec {
        column: "part_num",
        pointer: "/part_num",
        key_type: KeyType::Text,
    },
    fields: &[
        FieldSpec {
            column: "part_url",
            pointer: "/part_url",
        },
        FieldSpec {
            column: "part_img_url",
            pointer: "/part_img_url",
        },
        FieldSpec {
            column: "bricklink_id",
            pointer: "/external_ids/BrickLink/0",
        },
        FieldSpec {
            column: "brickowl_id",
            pointer: "/external_ids/BrickOwl/0",
        },
        FieldSpec {
            column: "print_of",
            pointer: "/print_of",
        },
    ],
};

pub static PART_CATEGORY: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::PartCategory,
    table: "part_categories",
    key: KeySpec {
        column: "id",
        pointer: "/id",
        key_type: KeyType::Integer,
    },
    fields: &[FieldSpec {
        column: "part_count",
        pointer: "/part_count",
    }],
};
